use chrono::NaiveDate;

/// Builder for the JQL expression sent to the Jira search endpoint:
/// a project clause plus an optional half-open creation-date window.
#[derive(Debug, Clone)]
pub struct JqlFilter {
    project: String,
    created_on_or_after: Option<NaiveDate>,
    created_before: Option<NaiveDate>,
}

impl JqlFilter {
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            created_on_or_after: None,
            created_before: None,
        }
    }

    pub fn created_on_or_after(mut self, date: NaiveDate) -> Self {
        self.created_on_or_after = Some(date);
        self
    }

    pub fn created_before(mut self, date: NaiveDate) -> Self {
        self.created_before = Some(date);
        self
    }

    pub fn to_jql(&self) -> String {
        let mut clauses = vec![format!("project = {}", self.project)];

        if let Some(date) = self.created_on_or_after {
            clauses.push(format!("createdDate >= \"{}\"", date.format("%Y-%m-%d")));
        }
        if let Some(date) = self.created_before {
            clauses.push(format!("createdDate < \"{}\"", date.format("%Y-%m-%d")));
        }

        clauses.join(" AND ")
    }
}

/// One filter per calendar year in `[from_year, to_year]`. The source
/// tracker caps search results per query, so the full history is fetched in
/// year-wide windows.
pub fn year_windows(project: &str, from_year: i32, to_year: i32) -> Vec<JqlFilter> {
    (from_year..=to_year)
        .map(|year| {
            JqlFilter::new(project)
                .created_on_or_after(NaiveDate::from_ymd_opt(year, 1, 1).unwrap())
                .created_before(NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_only_filter() {
        assert_eq!(JqlFilter::new("TW").to_jql(), "project = TW");
    }

    #[test]
    fn test_windowed_filter() {
        let jql = JqlFilter::new("TW")
            .created_on_or_after(NaiveDate::from_ymd_opt(2008, 1, 1).unwrap())
            .created_before(NaiveDate::from_ymd_opt(2009, 1, 1).unwrap())
            .to_jql();

        assert_eq!(
            jql,
            "project = TW AND createdDate >= \"2008-01-01\" AND createdDate < \"2009-01-01\""
        );
    }

    #[test]
    fn test_year_windows_cover_range() {
        let windows = year_windows("TW", 2008, 2018);
        assert_eq!(windows.len(), 11);
        assert!(windows[0].to_jql().contains("2008-01-01"));
        assert!(windows[10].to_jql().contains("2019-01-01"));
    }

    #[test]
    fn test_single_year_window() {
        let windows = year_windows("TW", 2015, 2015);
        assert_eq!(windows.len(), 1);
        let jql = windows[0].to_jql();
        assert!(jql.contains(">= \"2015-01-01\""));
        assert!(jql.contains("< \"2016-01-01\""));
    }
}
