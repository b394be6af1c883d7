//! Search and social metadata generation.
//!
//! Departments, courses, faculty and news items carry the same set of SEO
//! columns. When a row is saved, every column that is still empty is
//! synthesized from the row's own content; columns that already hold a value
//! are never touched. Running the generator twice over the same content is a
//! no-op.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Field limits (characters)
// ---------------------------------------------------------------------------

pub const META_TITLE_MAX: usize = 70;
pub const OG_TITLE_MAX: usize = 95;
pub const TWITTER_TITLE_MAX: usize = 70;
pub const META_DESCRIPTION_MAX: usize = 160;
pub const OG_DESCRIPTION_MAX: usize = 200;
pub const TWITTER_DESCRIPTION_MAX: usize = 200;
pub const META_KEYWORDS_MAX: usize = 255;
pub const FOCUS_KEYWORD_MAX: usize = 100;
pub const BREADCRUMB_TITLE_MAX: usize = 60;

const ELLIPSIS: &str = "...";

pub const DEFAULT_ROBOTS: &str = "index, follow";
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Remove HTML tags, decode the common entities and collapse whitespace.
///
/// ```
/// use campus_core::seo::strip_html;
///
/// assert_eq!(strip_html("<p>Labs &amp; <b>research</b></p>"), "Labs & research");
/// ```
pub fn strip_html(html: &str) -> String {
    let text = TAG_RE.replace_all(html, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Shorten `text` to at most `max_chars` characters.
///
/// When the text has to be cut it breaks at the last whitespace that still
/// fits and appends `...`; the result never exceeds `max_chars`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }

    let budget = max_chars - ELLIPSIS.len();
    let head: String = text.chars().take(budget).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => head[..idx].trim_end(),
        _ => head.trim_end(),
    };
    format!("{cut}{ELLIPSIS}")
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn fill(slot: &mut Option<String>, value: impl FnOnce() -> Option<String>) {
    if is_blank(slot) {
        if let Some(v) = value().filter(|v| !v.trim().is_empty()) {
            *slot = Some(v);
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Site-wide settings used by every template.
#[derive(Debug, Clone)]
pub struct SiteSeo {
    pub site_name: String,
    /// Public origin without trailing slash, e.g. `https://example.edu`.
    pub base_url: String,
    pub locale: String,
    pub twitter_handle: Option<String>,
    pub default_image: Option<String>,
}

impl SiteSeo {
    /// Absolute URL for a site path or an already absolute URL.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Which kind of page the metadata describes. Decides `og:type` and the
/// JSON-LD `@type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeoKind {
    Department,
    Course,
    Faculty,
    NewsArticle,
    Event,
}

impl SeoKind {
    pub fn schema_type(self) -> &'static str {
        match self {
            SeoKind::Department => "EducationalOrganization",
            SeoKind::Course => "Course",
            SeoKind::Faculty => "Person",
            SeoKind::NewsArticle => "NewsArticle",
            SeoKind::Event => "Event",
        }
    }

    pub fn og_type(self) -> &'static str {
        match self {
            SeoKind::Faculty => "profile",
            SeoKind::NewsArticle | SeoKind::Event => "article",
            SeoKind::Department | SeoKind::Course => "website",
        }
    }
}

/// The content a row offers to the generator.
#[derive(Debug, Clone)]
pub struct SeoSource {
    pub kind: SeoKind,
    /// Display title: department/course/faculty name or news heading.
    pub title: String,
    /// Rich-text body used for descriptions (HTML allowed).
    pub summary_html: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    /// Site path of the public page, e.g. `/departments/physics`.
    pub path: String,
    /// Extra keywords beyond the title (department name, tags, ...).
    pub keywords: Vec<String>,
    pub author: Option<String>,
    /// Kind-specific JSON-LD properties merged into the generated schema.
    pub schema_extra: Map<String, Value>,
}

impl SeoSource {
    pub fn new(kind: SeoKind, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            summary_html: None,
            image: None,
            image_alt: None,
            path: path.into(),
            keywords: Vec::new(),
            author: None,
            schema_extra: Map::new(),
        }
    }

    pub fn summary(mut self, html: Option<&str>) -> Self {
        self.summary_html = html.map(str::to_string);
        self
    }

    pub fn image(mut self, image: Option<&str>, alt: Option<&str>) -> Self {
        self.image = image.map(str::to_string);
        self.image_alt = alt.map(str::to_string);
        self
    }

    pub fn keyword(mut self, keyword: Option<&str>) -> Self {
        if let Some(k) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
            self.keywords.push(k.to_string());
        }
        self
    }

    pub fn author(mut self, author: Option<&str>) -> Self {
        self.author = author.map(str::to_string);
        self
    }

    pub fn schema(mut self, key: &str, value: Value) -> Self {
        if !value.is_null() {
            self.schema_extra.insert(key.to_string(), value);
        }
        self
    }

    fn description(&self, site: &SiteSeo) -> String {
        let plain = self
            .summary_html
            .as_deref()
            .map(strip_html)
            .unwrap_or_default();
        if plain.is_empty() {
            format!("{} at {}.", self.title.trim(), site.site_name)
        } else {
            plain
        }
    }
}

// ---------------------------------------------------------------------------
// Field set
// ---------------------------------------------------------------------------

/// The SEO column set shared by every SEO-enabled table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoFields {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub robots: Option<String>,
    pub author: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_image_alt: Option<String>,
    pub og_type: Option<String>,
    pub og_url: Option<String>,
    pub og_site_name: Option<String>,
    pub og_locale: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub twitter_image_alt: Option<String>,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub schema_type: Option<String>,
    pub schema_json: Option<Value>,
    pub focus_keyword: Option<String>,
    pub breadcrumb_title: Option<String>,
}

/// Column names in the order used by [`SeoFields::text_values`].
pub const TEXT_COLUMNS: [&str; 24] = [
    "meta_title",
    "meta_description",
    "meta_keywords",
    "canonical_url",
    "robots",
    "author",
    "og_title",
    "og_description",
    "og_image",
    "og_image_alt",
    "og_type",
    "og_url",
    "og_site_name",
    "og_locale",
    "twitter_card",
    "twitter_title",
    "twitter_description",
    "twitter_image",
    "twitter_image_alt",
    "twitter_site",
    "twitter_creator",
    "schema_type",
    "focus_keyword",
    "breadcrumb_title",
];

impl SeoFields {
    /// Text columns in [`TEXT_COLUMNS`] order, for binding.
    pub fn text_values(&self) -> [&Option<String>; 24] {
        [
            &self.meta_title,
            &self.meta_description,
            &self.meta_keywords,
            &self.canonical_url,
            &self.robots,
            &self.author,
            &self.og_title,
            &self.og_description,
            &self.og_image,
            &self.og_image_alt,
            &self.og_type,
            &self.og_url,
            &self.og_site_name,
            &self.og_locale,
            &self.twitter_card,
            &self.twitter_title,
            &self.twitter_description,
            &self.twitter_image,
            &self.twitter_image_alt,
            &self.twitter_site,
            &self.twitter_creator,
            &self.schema_type,
            &self.focus_keyword,
            &self.breadcrumb_title,
        ]
    }

    /// Copy every field that is set in `explicit` over `self`.
    pub fn overlay(&mut self, explicit: &SeoFields) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if explicit.$field.is_some() {
                        self.$field = explicit.$field.clone();
                    }
                )*
            };
        }
        take!(
            meta_title,
            meta_description,
            meta_keywords,
            canonical_url,
            robots,
            author,
            og_title,
            og_description,
            og_image,
            og_image_alt,
            og_type,
            og_url,
            og_site_name,
            og_locale,
            twitter_card,
            twitter_title,
            twitter_description,
            twitter_image,
            twitter_image_alt,
            twitter_site,
            twitter_creator,
            schema_type,
            schema_json,
            focus_keyword,
            breadcrumb_title,
        );
    }

    /// Fill every blank field from `source`. Populated fields are kept as is.
    pub fn fill_missing(&mut self, source: &SeoSource, site: &SiteSeo) {
        let title = source.title.trim().to_string();
        let titled = format!("{title} | {}", site.site_name);
        let description = source.description(site);
        let url = site.absolute(&source.path);
        let image = source
            .image
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .or(site.default_image.as_deref())
            .map(|i| site.absolute(i));
        let image_alt = source.image_alt.clone().or_else(|| Some(title.clone()));

        fill(&mut self.meta_title, || Some(truncate(&titled, META_TITLE_MAX)));
        fill(&mut self.meta_description, || {
            Some(truncate(&description, META_DESCRIPTION_MAX))
        });
        fill(&mut self.meta_keywords, || {
            Some(truncate(&keyword_list(source, site), META_KEYWORDS_MAX))
        });
        fill(&mut self.canonical_url, || Some(url.clone()));
        fill(&mut self.robots, || Some(DEFAULT_ROBOTS.to_string()));
        fill(&mut self.author, || {
            source.author.clone().or_else(|| Some(site.site_name.clone()))
        });

        fill(&mut self.og_title, || Some(truncate(&titled, OG_TITLE_MAX)));
        fill(&mut self.og_description, || {
            Some(truncate(&description, OG_DESCRIPTION_MAX))
        });
        fill(&mut self.og_image, || image.clone());
        fill(&mut self.og_image_alt, || image_alt.clone());
        fill(&mut self.og_type, || Some(source.kind.og_type().to_string()));
        fill(&mut self.og_url, || Some(url.clone()));
        fill(&mut self.og_site_name, || Some(site.site_name.clone()));
        fill(&mut self.og_locale, || Some(site.locale.clone()));

        fill(&mut self.twitter_card, || Some(DEFAULT_TWITTER_CARD.to_string()));
        fill(&mut self.twitter_title, || {
            Some(truncate(&titled, TWITTER_TITLE_MAX))
        });
        fill(&mut self.twitter_description, || {
            Some(truncate(&description, TWITTER_DESCRIPTION_MAX))
        });
        fill(&mut self.twitter_image, || image.clone());
        fill(&mut self.twitter_image_alt, || image_alt.clone());
        fill(&mut self.twitter_site, || site.twitter_handle.clone());
        fill(&mut self.twitter_creator, || site.twitter_handle.clone());

        fill(&mut self.schema_type, || {
            Some(source.kind.schema_type().to_string())
        });
        fill(&mut self.focus_keyword, || {
            Some(truncate(&title.to_lowercase(), FOCUS_KEYWORD_MAX))
        });
        fill(&mut self.breadcrumb_title, || {
            Some(truncate(&title, BREADCRUMB_TITLE_MAX))
        });

        let schema_empty = match &self.schema_json {
            None | Some(Value::Null) => true,
            Some(Value::Object(map)) => map.is_empty(),
            Some(_) => false,
        };
        if schema_empty {
            self.schema_json = Some(json_ld(source, site, &description, &url, image.as_deref()));
        }
    }
}

fn keyword_list(source: &SeoSource, site: &SiteSeo) -> String {
    let mut words: Vec<String> = Vec::new();
    let candidates = std::iter::once(source.title.trim().to_string())
        .chain(source.keywords.iter().map(|k| k.trim().to_string()))
        .chain(std::iter::once(site.site_name.clone()));
    for word in candidates {
        if !word.is_empty() && !words.iter().any(|w| w.eq_ignore_ascii_case(&word)) {
            words.push(word);
        }
    }
    words.join(", ")
}

fn json_ld(
    source: &SeoSource,
    site: &SiteSeo,
    description: &str,
    url: &str,
    image: Option<&str>,
) -> Value {
    let name_key = match source.kind {
        SeoKind::NewsArticle => "headline",
        _ => "name",
    };
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org"));
    schema.insert("@type".into(), json!(source.kind.schema_type()));
    schema.insert(name_key.into(), json!(source.title.trim()));
    schema.insert(
        "description".into(),
        json!(truncate(description, META_DESCRIPTION_MAX)),
    );
    schema.insert("url".into(), json!(url));
    if let Some(image) = image {
        schema.insert("image".into(), json!(image));
    }

    let organization = json!({
        "@type": "EducationalOrganization",
        "name": site.site_name,
        "url": site.base_url,
    });
    match source.kind {
        SeoKind::Department => {
            schema.insert("parentOrganization".into(), organization);
        }
        SeoKind::Course => {
            schema.insert("provider".into(), organization);
        }
        SeoKind::Faculty => {
            schema.insert("affiliation".into(), organization);
        }
        SeoKind::NewsArticle => {
            schema.insert("publisher".into(), organization);
        }
        SeoKind::Event => {
            schema.insert("organizer".into(), organization);
        }
    }

    for (key, value) in &source.schema_extra {
        schema.insert(key.clone(), value.clone());
    }
    Value::Object(schema)
}
