use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GNewsResponse {
    pub articles: Vec<GNewsArticle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GNewsArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<GNewsSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GNewsSource {
    pub name: Option<String>,
}
