// src/domain/complaint.rs
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single citizen-submitted report of an urban problem.
///
/// Serialized field names match the persisted JSON layout:
/// `id`, `name`, `address`, `type`, `description`, `status`,
/// `createdAt`, `updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: ComplaintType,
    pub description: String,
    pub status: ComplaintStatus,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Case-insensitive substring match against address, description and name.
    /// `needle` must already be lowercased.
    pub fn matches_term(&self, needle: &str) -> bool {
        self.address.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.name.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintType {
    WaterOutage,
    PowerOutage,
    RoadDamage,
    PublicLighting,
    SewageProblem,
    GarbageCollection,
    PublicCleaning,
    Other,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 8] = [
        ComplaintType::WaterOutage,
        ComplaintType::PowerOutage,
        ComplaintType::RoadDamage,
        ComplaintType::PublicLighting,
        ComplaintType::SewageProblem,
        ComplaintType::GarbageCollection,
        ComplaintType::PublicCleaning,
        ComplaintType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintType::WaterOutage => "water_outage",
            ComplaintType::PowerOutage => "power_outage",
            ComplaintType::RoadDamage => "road_damage",
            ComplaintType::PublicLighting => "public_lighting",
            ComplaintType::SewageProblem => "sewage_problem",
            ComplaintType::GarbageCollection => "garbage_collection",
            ComplaintType::PublicCleaning => "public_cleaning",
            ComplaintType::Other => "other",
        }
    }

    /// Long label shown in the submission form's select.
    pub fn form_label(self) -> &'static str {
        match self {
            ComplaintType::WaterOutage => "Falta de água",
            ComplaintType::PowerOutage => "Falta de energia elétrica",
            ComplaintType::RoadDamage => "Danos na via pública (buracos, etc)",
            ComplaintType::PublicLighting => "Problemas na iluminação pública",
            ComplaintType::SewageProblem => "Problemas de esgoto",
            ComplaintType::GarbageCollection => "Problemas na coleta de lixo",
            ComplaintType::PublicCleaning => "Limpeza pública",
            ComplaintType::Other => "Outro problema",
        }
    }

    /// Short label shown on complaint cards.
    pub fn label(self) -> &'static str {
        match self {
            ComplaintType::WaterOutage => "Falta de água",
            ComplaintType::PowerOutage => "Falta de energia",
            ComplaintType::RoadDamage => "Danos na via",
            ComplaintType::PublicLighting => "Iluminação pública",
            ComplaintType::SewageProblem => "Problema de esgoto",
            ComplaintType::GarbageCollection => "Coleta de lixo",
            ComplaintType::PublicCleaning => "Limpeza pública",
            ComplaintType::Other => "Outro problema",
        }
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown complaint type: {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pendente",
            ComplaintStatus::InProgress => "Em andamento",
            ComplaintStatus::Resolved => "Resolvido",
        }
    }

    /// Plural label used by the status filter.
    pub fn filter_label(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pendentes",
            ComplaintStatus::InProgress => "Em andamento",
            ComplaintStatus::Resolved => "Resolvidos",
        }
    }

    /// Confirmation shown after a status change.
    pub fn changed_message(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Denúncia marcada como pendente",
            ComplaintStatus::InProgress => "Denúncia marcada como em andamento",
            ComplaintStatus::Resolved => "Denúncia marcada como resolvida",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("unknown complaint status: {s:?}"))
    }
}

/// Current time truncated to milliseconds, the precision timestamps are persisted with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Human relative time in pt-BR, e.g. "há 5 minutos".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    let (n, singular, plural) = match secs {
        0..=44 => return "há menos de um minuto".to_string(),
        45..=3_599 => ((secs + 30) / 60, "minuto", "minutos"),
        3_600..=86_399 => ((secs + 1_800) / 3_600, "hora", "horas"),
        86_400..=2_591_999 => ((secs + 43_200) / 86_400, "dia", "dias"),
        2_592_000..=31_535_999 => ((secs + 1_296_000) / 2_592_000, "mês", "meses"),
        _ => (secs / 31_536_000, "ano", "anos"),
    };

    let n = n.max(1);
    if n == 1 {
        format!("há 1 {singular}")
    } else {
        format!("há {n} {plural}")
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
