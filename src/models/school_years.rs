use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学期
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "frontend/src/types/generated/school_year.ts")]
pub enum Semester {
    First,
    Second,
    Summer,
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Semester>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的学期: '{s}'. 支持的学期: first, second, summer"
            ))
        })
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::First => write!(f, "first"),
            Semester::Second => write!(f, "second"),
            Semester::Summer => write!(f, "summer"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Semester::First),
            "second" => Ok(Semester::Second),
            "summer" => Ok(Semester::Summer),
            _ => Err(format!("Invalid semester: {s}")),
        }
    }
}

// 学年实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/school_year.ts")]
pub struct SchoolYear {
    pub id: i64,
    pub label: String,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学年创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/school_year.ts")]
pub struct CreateSchoolYearRequest {
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_round_trip() {
        for s in [Semester::First, Semester::Second, Semester::Summer] {
            assert_eq!(s.to_string().parse::<Semester>().unwrap(), s);
        }
        assert!("third".parse::<Semester>().is_err());
    }
}
