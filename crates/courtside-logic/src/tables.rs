//! Static reference tables: school profiles, Titan odds, conference NIL caps,
//! identity multipliers and the professional salary table.
//!
//! Tables are loaded once (usually from JSON) and handed to the engines by
//! reference. Nothing here is global.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TablesError;

/// Titan probability used for schools without an entry.
pub const DEFAULT_TITAN_RATE: f64 = 0.0001;

/// League average used when the salary table is empty. Keeps the NIL salary
/// scaling factor at 1.0.
pub const FALLBACK_LEAGUE_AVERAGE: f64 = 10_000_000.0;

/// Max salary used when the salary table is empty.
pub const FALLBACK_MAX_SALARY: f64 = 50_000_000.0;

/// Similarity credited to a band-matched (not name-matched) comparable.
pub const BAND_MATCH_SIMILARITY: f64 = 0.5;

/// Share of graduates per field. Residual mass goes to generic professions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeWeights {
    pub tech: f64,
    pub finance: f64,
    pub health: f64,
    pub law: f64,
    pub education: f64,
    pub arts: f64,
}

impl ArchetypeWeights {
    pub fn total(&self) -> f64 {
        self.tech + self.finance + self.health + self.law + self.education + self.arts
    }
}

/// Scorecard-style earnings data for a school's graduates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsProfile {
    pub median_earnings_10yr: f64,
    pub median_debt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityProfile {
    pub median_household_income: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionProfile {
    #[serde(default)]
    pub archetype_weights: Option<ArchetypeWeights>,
    #[serde(default)]
    pub earnings: Option<EarningsProfile>,
    #[serde(default)]
    pub city: Option<CityProfile>,
}

/// Named-school multipliers, one map per identity category. A school may
/// appear in several; the multipliers compound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityTables {
    #[serde(default)]
    pub religious: BTreeMap<String, f64>,
    #[serde(default)]
    pub ivy_league: BTreeMap<String, f64>,
    #[serde(default)]
    pub flagship_state: BTreeMap<String, f64>,
    #[serde(default)]
    pub blue_blood: BTreeMap<String, f64>,
}

impl IdentityTables {
    pub fn multiplier(&self, school: &str) -> f64 {
        [
            &self.religious,
            &self.ivy_league,
            &self.flagship_state,
            &self.blue_blood,
        ]
        .iter()
        .filter_map(|table| table.get(school))
        .product()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub name: String,
    pub team: String,
    pub salary: f64,
}

/// A professional player used to anchor a simulated player's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProComparable {
    pub name: String,
    pub salary: f64,
    /// How closely the comparable matches, 0–1.
    pub similarity_score: f64,
}

/// Professional salaries keyed by player name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalaryTable {
    entries: Vec<SalaryEntry>,
}

impl SalaryTable {
    pub fn new(entries: Vec<SalaryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SalaryEntry] {
        &self.entries
    }

    pub fn league_average(&self) -> f64 {
        if self.entries.is_empty() {
            return FALLBACK_LEAGUE_AVERAGE;
        }
        self.entries.iter().map(|e| e.salary).sum::<f64>() / self.entries.len() as f64
    }

    pub fn max_salary(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.salary)
            .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.max(s))))
            .unwrap_or(FALLBACK_MAX_SALARY)
    }

    /// Accent-stripped, case-insensitive name lookup.
    pub fn find(&self, name: &str) -> Option<&SalaryEntry> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| normalize_name(&e.name) == key)
    }

    /// Name-matched comparable with full similarity.
    pub fn comparable(&self, name: &str) -> Option<ProComparable> {
        self.find(name).map(|e| ProComparable {
            name: e.name.clone(),
            salary: e.salary,
            similarity_score: 1.0,
        })
    }

    /// The entry whose salary sits closest to `projected_salary`, at reduced
    /// similarity. Ties keep the earlier entry.
    pub fn nearest_by_salary_band(&self, projected_salary: f64) -> Option<ProComparable> {
        let mut best: Option<&SalaryEntry> = None;
        for entry in &self.entries {
            let closer = match best {
                None => true,
                Some(b) => {
                    (entry.salary - projected_salary).abs() < (b.salary - projected_salary).abs()
                }
            };
            if closer {
                best = Some(entry);
            }
        }
        best.map(|e| ProComparable {
            name: e.name.clone(),
            salary: e.salary,
            similarity_score: BAND_MATCH_SIMILARITY,
        })
    }
}

/// Lowercase, strip Latin diacritics, drop punctuation, collapse whitespace.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        for folded in fold_char(c).chars() {
            if folded.is_ascii_alphanumeric() {
                out.push(folded.to_ascii_lowercase());
            } else if folded.is_whitespace() || folded == '-' {
                out.push(' ');
            }
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_char(c: char) -> String {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' => "a",
        'Ç' | 'ç' | 'Ć' | 'ć' | 'Č' | 'č' => "c",
        'Đ' | 'đ' | 'Ď' | 'ď' => "d",
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'Ğ' | 'ğ' => "g",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' | 'ī' | 'İ' | 'ı' => "i",
        'Ł' | 'ł' => "l",
        'Ñ' | 'ñ' | 'Ń' | 'ń' | 'Ň' | 'ň' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'Ř' | 'ř' => "r",
        'Ś' | 'ś' | 'Š' | 'š' | 'Ş' | 'ş' => "s",
        'ß' => "ss",
        'Ť' | 'ť' | 'Ţ' | 'ţ' => "t",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'Ý' | 'ý' | 'ÿ' => "y",
        'Ž' | 'ž' | 'Ź' | 'ź' | 'Ż' | 'ż' => "z",
        'Æ' | 'æ' => "ae",
        '\'' | '’' | '.' => "",
        other => return other.to_string(),
    };
    folded.to_string()
}

/// Every read-only table the engines consult.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    #[serde(default)]
    pub institutions: BTreeMap<String, InstitutionProfile>,
    #[serde(default)]
    pub titan_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub conference_caps: BTreeMap<String, f64>,
    #[serde(default)]
    pub identity: IdentityTables,
    #[serde(default)]
    pub salaries: SalaryTable,
}

impl ReferenceTables {
    /// Parse and validate tables from JSON.
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        let tables: ReferenceTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        for entry in self.salaries.entries() {
            if entry.salary < 0.0 {
                return Err(TablesError::NegativeSalary {
                    name: entry.name.clone(),
                    salary: entry.salary,
                });
            }
        }
        for (school, profile) in &self.institutions {
            if let Some(weights) = &profile.archetype_weights {
                let total = weights.total();
                if total > 1.0 + 1e-9 {
                    return Err(TablesError::WeightsOverflow {
                        school: school.clone(),
                        total,
                    });
                }
            }
        }
        for (school, &rate) in &self.titan_rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(TablesError::TitanRateOutOfRange {
                    school: school.clone(),
                    rate,
                });
            }
        }
        for (conference, &cap) in &self.conference_caps {
            if cap <= 0.0 {
                return Err(TablesError::NonPositiveCap {
                    conference: conference.clone(),
                    cap,
                });
            }
        }
        Ok(())
    }

    pub fn institution(&self, school: &str) -> Option<&InstitutionProfile> {
        self.institutions.get(school)
    }

    pub fn titan_rate(&self, school: &str) -> f64 {
        self.titan_rates
            .get(school)
            .copied()
            .unwrap_or(DEFAULT_TITAN_RATE)
    }

    pub fn conference_cap(&self, conference: &str) -> Option<f64> {
        self.conference_caps.get(conference).copied()
    }

    pub fn identity_multiplier(&self, school: &str) -> f64 {
        self.identity.multiplier(school)
    }
}
