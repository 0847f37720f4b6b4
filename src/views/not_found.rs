use askama::Template;

use super::Header;
use crate::catalog::Catalog;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub header: Header,
    pub path: String,
}

impl NotFoundPage {
    pub fn build(catalog: &Catalog, path: &str) -> Self {
        Self {
            header: Header::new(&catalog.viewer, path),
            path: path.to_string(),
        }
    }
}
