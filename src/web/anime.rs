use axum::{
    extract::{Form, Path, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{AppState, WebError, render};
use crate::models::anime::AnimeFields;
use crate::web::validation::parse_episodes;

/// Form body shared by create and update. `episodes` arrives as text and
/// is coerced here so a bad value turns into a 400 naming the field
/// instead of a generic deserialization rejection.
#[derive(Deserialize)]
pub struct AnimeForm {
    pub name: String,
    pub author: String,
    pub episodes: String,
}

impl AnimeForm {
    fn into_fields(self) -> Result<AnimeFields, WebError> {
        let episodes = parse_episodes(&self.episodes)?;

        Ok(AnimeFields {
            name: self.name,
            author: self.author,
            episodes,
        })
    }
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let animes = state.store().list_anime().await?;

    Ok(Html(render::index_page(&animes)))
}

pub async fn create_anime(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnimeForm>,
) -> Result<Html<String>, WebError> {
    let fields = form.into_fields()?;
    state.store().add_anime(&fields).await?;

    relist(&state).await
}

pub async fn update_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<AnimeForm>,
) -> Result<Html<String>, WebError> {
    let fields = form.into_fields()?;

    // A missing id is a silent no-op; the fragment simply re-lists.
    state.store().update_anime(id, &fields).await?;

    relist(&state).await
}

pub async fn delete_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    state.store().remove_anime(id).await?;

    relist(&state).await
}

pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let anime = state
        .store()
        .get_anime(id)
        .await?
        .ok_or_else(|| WebError::anime_not_found(id))?;

    Ok(Html(render::edit_form_page(&anime)))
}

async fn relist(state: &AppState) -> Result<Html<String>, WebError> {
    let animes = state.store().list_anime().await?;

    Ok(Html(render::list_fragment(&animes)))
}
