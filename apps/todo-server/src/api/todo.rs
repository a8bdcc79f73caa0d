//! Todo page and form endpoints.

use axum::{
    Form,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::error::ServerResult;
use crate::state::SharedState;

/// Fields accepted by `/add`, from the form body or the query string.
#[derive(Debug, Default, Deserialize)]
pub struct AddItemForm {
    pub title: Option<String>,
}

/// Fields accepted by `/delete`, from the form body or the query string.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteItemForm {
    pub id: Option<String>,
}

/// Picks a submitted field. A field present in the body wins over the query
/// string, even when empty; a missing or unparseable source counts as absent.
fn form_value<T, E1, E2>(
    form: Result<Form<T>, E1>,
    query: Result<Query<T>, E2>,
    field: impl Fn(T) -> Option<String>,
) -> String {
    form.ok()
        .and_then(|Form(form)| field(form))
        .or_else(|| query.ok().and_then(|Query(query)| field(query)))
        .unwrap_or_default()
}

/// Renders the todo list.
pub async fn index(State(state): State<SharedState>) -> ServerResult<Html<String>> {
    let items = state.store.list().await?;
    Ok(Html(state.template.render(state.backend.label(), &items)))
}

/// Adds an item. A missing or empty title is ignored.
pub async fn add_item(
    State(state): State<SharedState>,
    query: Result<Query<AddItemForm>, QueryRejection>,
    form: Result<Form<AddItemForm>, FormRejection>,
) -> ServerResult<Redirect> {
    let title = form_value(form, query, |f| f.title);

    if !title.is_empty() {
        state.store.add(&title).await?;
        tracing::info!(title = %title, "Todo item added");
    }

    Ok(Redirect::to("/"))
}

/// Deletes an item. A missing id is ignored, as is an id that matches nothing.
pub async fn delete_item(
    State(state): State<SharedState>,
    query: Result<Query<DeleteItemForm>, QueryRejection>,
    form: Result<Form<DeleteItemForm>, FormRejection>,
) -> ServerResult<Redirect> {
    let id = form_value(form, query, |f| f.id);

    if !id.is_empty() {
        state.store.delete(&id).await?;
        tracing::info!(item_id = %id, "Todo item deleted");
    }

    Ok(Redirect::to("/"))
}
