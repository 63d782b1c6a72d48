use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

#[derive(Default)]
pub struct Store {
    countries: BTreeMap<i64, Country>,
    last_id: i64,
}

impl Store {
    fn insert(&mut self, name: String) -> Country {
        self.last_id += 1;
        let country = Country {
            id: self.last_id,
            name,
        };
        self.countries.insert(country.id, country.clone());
        country
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::<String>::new())
}

/// Router preloaded with `names`, assigned ids 1, 2, ...
pub fn app_with<I, S>(names: I) -> Router
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut store = Store::default();
    for name in names {
        store.insert(name.into());
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/Countries", get(list_countries).post(create_country))
        .route(
            "/Countries/{id}",
            get(get_country).put(update_country).delete(delete_country),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_countries(State(db): State<Db>) -> Json<Vec<Country>> {
    let store = db.read().await;
    Json(store.countries.values().cloned().collect())
}

async fn create_country(
    State(db): State<Db>,
    Json(input): Json<Country>,
) -> Result<(StatusCode, Json<Country>), StatusCode> {
    if input.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let country = db.write().await.insert(input.name);
    tracing::debug!(id = country.id, "country created");
    Ok((StatusCode::CREATED, Json(country)))
}

async fn get_country(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Country>, StatusCode> {
    let store = db.read().await;
    store.countries.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_country(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Country>,
) -> Result<StatusCode, StatusCode> {
    if input.id != 0 && input.id != id {
        return Err(StatusCode::BAD_REQUEST);
    }
    if input.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let country = store.countries.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    country.name = input.name;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_country(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .countries
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_serializes_to_json() {
        let country = Country {
            id: 1,
            name: "USA".to_string(),
        };
        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "USA");
    }

    #[test]
    fn store_assigns_increasing_ids() {
        let mut store = Store::default();
        assert_eq!(store.insert("USA".to_string()).id, 1);
        assert_eq!(store.insert("India".to_string()).id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = Store::default();
        let first = store.insert("USA".to_string());
        store.countries.remove(&first.id);
        assert_eq!(store.insert("India".to_string()).id, 2);
    }

    #[test]
    fn country_rejects_missing_name() {
        let result: Result<Country, _> = serde_json::from_str(r#"{"id":0}"#);
        assert!(result.is_err());
    }
}
