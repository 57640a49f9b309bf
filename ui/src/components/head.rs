use leptos::prelude::*;
use leptos_meta::{Meta, Script, Title};

use crate::content::ContentModel;

/// `<head>` values for one profile, plain data so it can be compared in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    /// `property=` tags
    pub open_graph: Vec<(&'static str, String)>,
    /// `name=` tags
    pub twitter: Vec<(&'static str, String)>,
    pub json_ld: String,
}

/// Joins a relative path onto the site url; absolute urls pass through.
pub fn absolute_url(site: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!(
        "{}/{}",
        site.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn person_json_ld(c: &ContentModel) -> serde_json::Value {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": c.name,
        "url": c.site_url,
        "sameAs": c.social_urls(),
        "jobTitle": c.job_title,
        "image": absolute_url(&c.site_url, &c.image),
    })
}

impl PageMeta {
    pub fn from_content(c: &ContentModel) -> Self {
        let title = format!("{} | Portfolio", c.name);
        let image = absolute_url(&c.site_url, &c.image);

        Self {
            open_graph: vec![
                ("og:title", title.clone()),
                ("og:description", c.description.clone()),
                ("og:type", "website".into()),
                ("og:url", c.site_url.clone()),
                ("og:image", image.clone()),
            ],
            twitter: vec![
                ("twitter:card", "summary_large_image".into()),
                ("twitter:title", title.clone()),
                ("twitter:description", c.description.clone()),
                ("twitter:image", image),
            ],
            json_ld: person_json_ld(c).to_string(),
            title,
            description: c.description.clone(),
            keywords: c.keywords.clone(),
            author: c.author.clone(),
        }
    }
}

#[component]
pub fn PageHead(meta: PageMeta) -> impl IntoView {
    let og = meta
        .open_graph
        .into_iter()
        .map(|(property, content)| view! { <Meta property=property content=content/> })
        .collect_view();

    let twitter = meta
        .twitter
        .into_iter()
        .map(|(name, content)| view! { <Meta name=name content=content/> })
        .collect_view();

    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        <Meta name="keywords" content=meta.keywords/>
        <Meta name="author" content=meta.author/>
        {og}
        {twitter}
        <Script type_="application/ld+json">{meta.json_ld}</Script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::sample;

    #[test]
    fn absolute_url_joins_and_passes_through() {
        assert_eq!(absolute_url("https://a.dev/", "/img/x.png"), "https://a.dev/img/x.png");
        assert_eq!(absolute_url("https://a.dev", "img/x.png"), "https://a.dev/img/x.png");
        assert_eq!(absolute_url("https://a.dev/", "https://cdn.b/x.png"), "https://cdn.b/x.png");
    }

    #[test]
    fn fields_come_from_content() {
        let meta = PageMeta::from_content(&sample());
        assert_eq!(meta.title, "Ada Example | Portfolio");
        assert_eq!(meta.keywords, "rust, wasm");
        assert!(meta.open_graph.contains(&("og:title", "Ada Example | Portfolio".into())));
        assert!(meta.open_graph.contains(&("og:image", "https://ada.dev/images/ada.png".into())));
        assert!(meta.twitter.contains(&("twitter:card", "summary_large_image".into())));
    }

    #[test]
    fn json_ld_describes_a_person() {
        let meta = PageMeta::from_content(&sample());
        let v: serde_json::Value = serde_json::from_str(&meta.json_ld).expect("valid json");
        assert_eq!(v["@type"], "Person");
        assert_eq!(v["name"], "Ada Example");
        assert_eq!(v["jobTitle"], "Engineer");
        assert_eq!(
            v["sameAs"],
            serde_json::json!(["https://github.com/ada", "https://twitter.com/ada"])
        );
    }

    #[test]
    fn identical_content_gives_identical_meta() {
        let c = sample();
        assert_eq!(PageMeta::from_content(&c), PageMeta::from_content(&c));
    }
}
