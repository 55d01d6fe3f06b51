use dofus_linker_core::CandidateRecord;
use serde::Deserialize;

/// A page of search results, as returned by every category endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Vec<ApiRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: LocalizedName,
}

/// Display name in each language the API knows. Only the two we use are kept.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LocalizedName {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub fr: Option<String>,
}

impl From<ApiRecord> for CandidateRecord {
    fn from(record: ApiRecord) -> Self {
        CandidateRecord {
            id: record.id,
            name_en: record.name.en,
            name_fr: record.name.fr,
        }
    }
}

impl SearchResponse {
    pub fn into_candidates(self) -> Vec<CandidateRecord> {
        self.data.into_iter().map(CandidateRecord::from).collect()
    }
}
