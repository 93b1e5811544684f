use serde::Deserialize;

/// Respuesta de listado: array plano o página DRF (`{count, next, previous, results}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Paginated {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    /// Solo se conserva una página; el cursor `next` se descarta
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) => items,
            ListResponse::Paginated { results, .. } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_paginated_lists() {
        let plain: ListResponse<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(plain.into_items(), vec![1, 2, 3]);

        let page: ListResponse<u32> = serde_json::from_str(
            r#"{"count": 40, "next": "/api/v1/planets/?page=2", "previous": null, "results": [7]}"#,
        )
        .unwrap();
        assert_eq!(page.into_items(), vec![7]);
    }
}
