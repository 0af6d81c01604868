use super::Platform;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVariant {
    pub headline: String,
    pub description: String,
    pub cta: String,
}

impl AdVariant {
    /// Headline, description and call to action separated by blank lines,
    /// ready to paste into an ad manager.
    pub fn full_text(&self) -> String {
        format!("{}\n\n{}\n\n{}", self.headline, self.description, self.cta)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAdVariant {
    pub key: String,
    pub variant: AdVariant,
}

/// Model output that passed structural validation. The trimmed text is kept
/// verbatim so it can be handed back to clients unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct AdSet {
    raw: String,
    ads: Map<String, Value>,
}

impl AdSet {
    pub fn new(raw: String, ads: Map<String, Value>) -> Self {
        Self { raw, ads }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn ads(&self) -> &Map<String, Value> {
        &self.ads
    }

    /// Entries shaped like an ad, in the order the model returned them.
    /// Anything missing one of the three text fields is skipped.
    pub fn variants(&self) -> Vec<NamedAdVariant> {
        self.ads
            .iter()
            .filter(|(key, _)| key.starts_with("ad"))
            .filter_map(|(key, value)| {
                let variant = serde_json::from_value::<AdVariant>(value.clone()).ok()?;
                Some(NamedAdVariant {
                    key: key.clone(),
                    variant,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFailure {
    pub error: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl PlatformFailure {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
            raw_content: None,
        }
    }

    pub fn with_raw_content(mut self, raw_content: String) -> Self {
        self.raw_content = Some(raw_content);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformResult {
    Success(AdSet),
    Failure(PlatformFailure),
}

impl PlatformResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The JSON text stored under the platform key on the wire.
    pub fn to_wire_string(&self) -> String {
        match self {
            Self::Success(ads) => ads.raw().to_string(),
            Self::Failure(failure) => serde_json::to_string(failure).unwrap_or_default(),
        }
    }
}

/// Per-platform outcome flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub platform: Platform,
    pub variants: Vec<NamedAdVariant>,
    pub error: Option<String>,
    pub details: Option<String>,
}

/// Results for every platform of one request, in platform order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    entries: Vec<(Platform, PlatformResult)>,
}

impl AggregateResult {
    pub fn new(entries: Vec<(Platform, PlatformResult)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, platform: Platform) -> Option<&PlatformResult> {
        self.entries
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformResult)> {
        self.entries.iter().map(|(p, result)| (*p, result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| !r.is_success()).count()
    }

    pub fn summaries(&self) -> Vec<PlatformSummary> {
        self.iter()
            .map(|(platform, result)| match result {
                PlatformResult::Success(ads) => PlatformSummary {
                    platform,
                    variants: ads.variants(),
                    error: None,
                    details: None,
                },
                PlatformResult::Failure(failure) => PlatformSummary {
                    platform,
                    variants: Vec::new(),
                    error: Some(failure.error.clone()),
                    details: Some(failure.details.clone()),
                },
            })
            .collect()
    }
}

/// Serializes as a flat object of platform name to JSON-encoded string.
impl Serialize for AggregateResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (platform, result) in &self.entries {
            map.serialize_entry(platform.as_str(), &result.to_wire_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad_set(raw: &str) -> AdSet {
        let ads = serde_json::from_str::<Map<String, Value>>(raw).unwrap();
        AdSet::new(raw.to_string(), ads)
    }

    #[test]
    fn variants_skip_malformed_entries() {
        let set = ad_set(
            r#"{"ad1":{"headline":"H","description":"D","cta":"C"},"ad2":{"headline":"only"},"ad3":"text"}"#,
        );
        let variants = set.variants();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].key, "ad1");
        assert_eq!(variants[0].variant.full_text(), "H\n\nD\n\nC");
    }

    #[test]
    fn variants_keep_model_order() {
        let set = ad_set(
            r#"{"ad2":{"headline":"B","description":"b","cta":"x"},"ad1":{"headline":"A","description":"a","cta":"y"}}"#,
        );
        let keys: Vec<_> = set.variants().into_iter().map(|v| v.key).collect();
        assert_eq!(keys, ["ad2", "ad1"]);
    }

    #[test]
    fn aggregate_serializes_values_as_strings() {
        let raw = r#"{"ad1":{"headline":"H","description":"D","cta":"C"}}"#;
        let aggregate = AggregateResult::new(vec![
            (Platform::Facebook, PlatformResult::Success(ad_set(raw))),
            (
                Platform::Instagram,
                PlatformResult::Failure(PlatformFailure::new(
                    "Invalid JSON response for instagram",
                    "eof",
                )),
            ),
        ]);

        let wire = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(wire["facebook"], raw);

        let failure: Value = serde_json::from_str(wire["instagram"].as_str().unwrap()).unwrap();
        assert_eq!(failure["error"], "Invalid JSON response for instagram");
        assert_eq!(failure["details"], "eof");
        assert!(failure.get("raw_content").is_none());
    }

    #[test]
    fn failure_wire_string_carries_raw_preview() {
        let result = PlatformResult::Failure(
            PlatformFailure::new(
                "Invalid JSON structure for tiktok",
                "No ad keys found in response",
            )
            .with_raw_content("{\"foo\": 1}".to_string()),
        );
        assert_eq!(
            result.to_wire_string(),
            r#"{"error":"Invalid JSON structure for tiktok","details":"No ad keys found in response","raw_content":"{\"foo\": 1}"}"#
        );
    }

    #[test]
    fn summaries_flatten_failures() {
        let aggregate = AggregateResult::new(vec![(
            Platform::Linkedin,
            PlatformResult::Failure(
                PlatformFailure::new("Error generating ad copy for linkedin", "401")
                    .with_raw_content("oops".to_string()),
            ),
        )]);
        let summaries = aggregate.summaries();
        assert_eq!(summaries[0].platform, Platform::Linkedin);
        assert_eq!(
            summaries[0].error.as_deref(),
            Some("Error generating ad copy for linkedin")
        );
        assert!(summaries[0].variants.is_empty());
        assert_eq!(aggregate.failure_count(), 1);
    }
}
