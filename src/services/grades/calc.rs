//! 成绩计算与备注汇总的纯函数

/// 四舍五入保留两位小数
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 综合成绩
///
/// 期中/期末都有值时取平均，否则退回单项成绩，都缺省则为 None。
pub(crate) fn cumulative_grade(
    midterm: Option<f64>,
    finals: Option<f64>,
    grade: Option<f64>,
) -> Option<f64> {
    match (midterm, finals) {
        (Some(m), Some(f)) => Some(round2((m + f) / 2.0)),
        _ => grade.map(round2),
    }
}

/// 备注汇总行，优先级：含 fail > 全部 pass > 空 > 混合
pub(crate) fn remarks_summary(remarks: &[Option<String>]) -> &'static str {
    let present: Vec<String> = remarks
        .iter()
        .filter_map(|r| r.as_deref())
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect();

    if present.iter().any(|r| r.contains("fail")) {
        return "Contains failing marks";
    }
    if !present.is_empty() && present.iter().all(|r| r.contains("pass")) {
        return "All passed";
    }
    if present.is_empty() {
        return "Pending";
    }
    "Mixed"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(76.124), 76.12);
        assert_eq!(round2(76.125), 76.13);
        assert_eq!(round2(85.5), 85.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_cumulative_averages_midterm_and_finals() {
        assert_eq!(cumulative_grade(Some(80.0), Some(90.0), None), Some(85.0));
        assert_eq!(
            cumulative_grade(Some(85.5), Some(90.0), Some(50.0)),
            Some(87.75)
        );
        assert_eq!(
            cumulative_grade(Some(70.5), Some(80.25), None),
            Some(75.38)
        );
    }

    #[test]
    fn test_cumulative_falls_back_to_single_grade() {
        assert_eq!(cumulative_grade(None, None, Some(88.456)), Some(88.46));
        assert_eq!(cumulative_grade(Some(80.0), None, Some(70.0)), Some(70.0));
        assert_eq!(cumulative_grade(None, Some(90.0), Some(70.0)), Some(70.0));
    }

    #[test]
    fn test_cumulative_all_missing() {
        assert_eq!(cumulative_grade(None, None, None), None);
        assert_eq!(cumulative_grade(Some(80.0), None, None), None);
        assert_eq!(cumulative_grade(None, Some(90.0), None), None);
    }

    fn r(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_remarks_fail_takes_precedence() {
        assert_eq!(
            remarks_summary(&r(&["Passed", "FAILED"])),
            "Contains failing marks"
        );
        assert_eq!(remarks_summary(&r(&["fail"])), "Contains failing marks");
    }

    #[test]
    fn test_remarks_all_passed() {
        assert_eq!(remarks_summary(&r(&["Passed", "passed"])), "All passed");
        assert_eq!(remarks_summary(&r(&["PASS"])), "All passed");
    }

    #[test]
    fn test_remarks_pending_when_empty() {
        assert_eq!(remarks_summary(&[]), "Pending");
        assert_eq!(remarks_summary(&[None, Some("  ".to_string())]), "Pending");
    }

    #[test]
    fn test_remarks_mixed() {
        assert_eq!(remarks_summary(&r(&["Passed", "Incomplete"])), "Mixed");
        assert_eq!(remarks_summary(&[Some("Incomplete".to_string()), None]), "Mixed");
    }
}
