//! Single-field image patch shared by authors and works.

use serde::Deserialize;

/// Body of `PATCH` requests that replace only `url_imagem`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateImageUrl {
    #[serde(rename = "url_imagem")]
    pub image_url: String,
}
