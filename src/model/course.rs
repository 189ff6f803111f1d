use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::utils::{lenient_f64, lenient_i64, lenient_string, lenient_text, lenient_u32, lenient_vec};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CourseLocation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

impl CourseLocation {
    /// `"1 Main St, Springfield, IL, USA"`, skipping the parts that are missing.
    #[must_use]
    pub fn one_line(&self) -> String {
        [&self.address, &self.city, &self.state, &self.country]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TeeHole {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub hole_number: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub par: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub yardage: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub handicap: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Tee {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tee_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub course_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub slope_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bogey_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_yards: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub number_of_holes: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub par_total: u32,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub holes: Vec<TeeHole>,
}

impl Tee {
    /// Hole count as published, or the length of the hole table when the count is missing.
    #[must_use]
    pub fn hole_count(&self) -> u32 {
        if self.number_of_holes > 0 {
            self.number_of_holes
        } else {
            u32::try_from(self.holes.len()).unwrap_or(u32::MAX)
        }
    }

    /// Hole `n` (1-based). Positional when the table omits hole numbers.
    #[must_use]
    pub fn hole(&self, n: u32) -> Option<&TeeHole> {
        self.holes
            .iter()
            .find(|h| h.hole_number == n)
            .or_else(|| {
                let idx = usize::try_from(n).ok()?.checked_sub(1)?;
                self.holes.get(idx).filter(|h| h.hole_number == 0)
            })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TeesByGender {
    pub male: Vec<Tee>,
    pub female: Vec<Tee>,
}

impl TeesByGender {
    #[must_use]
    pub fn for_gender(&self, gender: Gender) -> &[Tee] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

#[derive(Deserialize)]
struct GenderedTees {
    #[serde(default, deserialize_with = "lenient_vec")]
    male: Vec<Tee>,
    #[serde(default, deserialize_with = "lenient_vec")]
    female: Vec<Tee>,
}

// Course documents carry either `{"male": [...], "female": [...]}` or a flat list whose
// entries say `"gender": "M" | "F"`.
impl<'de> Deserialize<'de> for TeesByGender {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(obj @ Value::Object(_)) => serde_json::from_value::<GenderedTees>(obj)
                .map(|g| TeesByGender {
                    male: g.male,
                    female: g.female,
                })
                .unwrap_or_default(),
            Some(Value::Array(items)) => {
                let mut tees = TeesByGender::default();
                for tee in items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value::<Tee>(item).ok())
                {
                    let female = tee
                        .gender
                        .as_deref()
                        .is_some_and(|g| g.eq_ignore_ascii_case("f") || g.eq_ignore_ascii_case("female"));
                    if female {
                        tees.female.push(tee);
                    } else {
                        tees.male.push(tee);
                    }
                }
                tees
            }
            _ => TeesByGender::default(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub club_name: Option<String>,
    #[serde(default, alias = "name", deserialize_with = "lenient_string")]
    pub course_name: Option<String>,
    #[serde(default)]
    pub location: CourseLocation,
    #[serde(default)]
    pub tees: TeesByGender,
}

impl Course {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.course_name
            .as_deref()
            .or(self.club_name.as_deref())
            .unwrap_or("Unknown Course")
    }

    pub fn all_tees(&self) -> impl Iterator<Item = (Gender, &Tee)> {
        self.tees
            .male
            .iter()
            .map(|t| (Gender::Male, t))
            .chain(self.tees.female.iter().map(|t| (Gender::Female, t)))
    }

    /// First tee with this name, men's tees first.
    #[must_use]
    pub fn find_tee(&self, tee_name: &str) -> Option<(Gender, &Tee)> {
        self.all_tees().find(|(_, t)| t.tee_name == tee_name)
    }
}

/// The search endpoint answers with a bare list or with `{"courses": [...]}`.
#[must_use]
pub fn parse_course_list(value: Value) -> Vec<Course> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("courses") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}
