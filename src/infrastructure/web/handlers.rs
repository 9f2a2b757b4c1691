//! Form handlers

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::services::ConversionRequest;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::web::page::{FormPage, Outcome};

/// Submitted form fields. Both are optional so a partial submission still renders.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionForm {
    pub temp: Option<String>,
    #[serde(rename = "type")]
    pub direction: Option<String>,
}

/// `GET /`: the empty form.
pub async fn show_form(State(container): State<Arc<ServiceContainer>>) -> Html<String> {
    Html(FormPage::empty(&container.settings.page.title).render())
}

/// `POST /`: convert and re-render the form with the result.
#[instrument(skip(container))]
pub async fn submit_form(
    State(container): State<Arc<ServiceContainer>>,
    Form(form): Form<ConversionForm>,
) -> Html<String> {
    let temp = form.temp.as_deref();
    let (direction, outcome) = match ConversionRequest::from_form(temp, form.direction.as_deref()) {
        Ok(request) => {
            let conversion = container.conversion.convert(&request);
            (Some(request.direction), Outcome::Converted(conversion))
        }
        Err(e) => {
            debug!("submit_form: {}", e);
            (None, Outcome::Rejected("Please choose a conversion.".into()))
        }
    };

    let page = FormPage {
        title: &container.settings.page.title,
        temp,
        direction,
        outcome: Some(outcome),
    };
    Html(page.render())
}
