//! Orchestrates a listing run.
//!
//! Organizations are processed strictly one after another: the listing for
//! an organization is fetched, decoded and fully written before the next
//! request is issued. The first failure ends the run.

mod config;
mod error;

pub use config::{ListerConfig, DEFAULT_API_URL, DEFAULT_PER_PAGE, GITHUB_MAX_PER_PAGE};
pub use error::ListerError;

use crate::config::validate_organizations;
use crate::listing::{decode_listing, RepositoryLine};
use crate::source::{GitHubSource, RepositorySource};
use crate::summary::ListingSummary;
use std::io::Write;
use tracing::{debug, info, info_span, warn, Instrument};

/// Lists the configured organizations against the GitHub API.
pub struct Lister {
    config: ListerConfig,
    source: GitHubSource,
}

impl Lister {
    /// Builds a lister from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ListerError::Config`] for an invalid organization list and
    /// [`ListerError::Source`] if the GitHub client cannot be built.
    pub fn new(config: ListerConfig) -> Result<Self, ListerError> {
        validate_organizations(config.organizations(), "configuration")?;
        let source = GitHubSource::new(config.api_url(), config.per_page())?;
        Ok(Self { config, source })
    }

    /// Lists every configured organization, writing lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ListerError`] hit; later organizations are not
    /// queried.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ListingSummary, ListerError> {
        info!(
            organizations = self.config.organizations().len(),
            per_page = self.config.per_page(),
            api_url = %self.config.api_url(),
            "Listing repositories"
        );

        let summary = list_and_print(&self.source, self.config.organizations(), out).await?;

        for organization in summary.full_page_organizations(self.config.per_page()) {
            warn!(
                organization = %organization,
                "Listing filled a whole page, further repositories were not fetched"
            );
        }

        let empty: Vec<&str> = summary.empty_organizations().collect();
        if !empty.is_empty() {
            info!(organizations = ?empty, "Organizations without repositories");
        }

        info!(
            organizations = summary.organizations_listed,
            repositories = summary.repositories_printed,
            "Listing complete"
        );
        Ok(summary)
    }
}

/// Lists `organizations` in order, writing one line per repository to `out`.
///
/// Exactly one request is made per organization. Output for an organization
/// is written and flushed before the next organization is requested.
///
/// # Errors
///
/// Returns the first fetch, decode or write error. Lines written before the
/// failure stay written; no further organization is requested.
pub async fn list_and_print<S, W>(
    source: &S,
    organizations: &[String],
    out: &mut W,
) -> Result<ListingSummary, ListerError>
where
    S: RepositorySource,
    W: Write,
{
    let mut summary = ListingSummary::new();

    for organization in organizations {
        let span = info_span!("list", organization = %organization);
        let count = list_organization(source, organization, out)
            .instrument(span)
            .await?;
        summary.record_organization(organization, count);
    }

    Ok(summary)
}

async fn list_organization<S, W>(
    source: &S,
    organization: &str,
    out: &mut W,
) -> Result<usize, ListerError>
where
    S: RepositorySource,
    W: Write,
{
    debug!("Fetching listing");
    let body = source
        .fetch_listing(organization)
        .await
        .map_err(|e| ListerError::Fetch {
            organization: organization.to_string(),
            source: e,
        })?;

    let records = decode_listing(&body).map_err(|e| ListerError::Decode {
        organization: organization.to_string(),
        source: e,
    })?;

    for record in &records {
        let line = RepositoryLine::from_record(organization, record).map_err(|e| {
            ListerError::Decode {
                organization: organization.to_string(),
                source: e,
            }
        })?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(count = records.len(), "Organization listed");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingError;
    use crate::organizations::default_organizations;
    use crate::source::SourceError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Request(String),
        Line(String),
    }

    type EventLog = Rc<RefCell<Vec<Event>>>;

    /// Serves canned bodies; unknown organizations get an empty listing.
    struct CannedSource {
        bodies: HashMap<String, String>,
        events: EventLog,
    }

    impl CannedSource {
        fn new(events: EventLog) -> Self {
            Self {
                bodies: HashMap::new(),
                events,
            }
        }

        fn with_body(mut self, organization: &str, body: &str) -> Self {
            self.bodies
                .insert(organization.to_string(), body.to_string());
            self
        }
    }

    impl RepositorySource for CannedSource {
        async fn fetch_listing(&self, organization: &str) -> Result<String, SourceError> {
            self.events
                .borrow_mut()
                .push(Event::Request(organization.to_string()));
            Ok(self
                .bodies
                .get(organization)
                .cloned()
                .unwrap_or_else(|| "[]".to_string()))
        }
    }

    /// Records every completed line into the shared event log.
    struct LoggingWriter {
        pending: Vec<u8>,
        events: EventLog,
    }

    impl Write for LoggingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            for &byte in buf {
                if byte == b'\n' {
                    let line = String::from_utf8_lossy(&self.pending).into_owned();
                    self.events.borrow_mut().push(Event::Line(line));
                    self.pending.clear();
                } else {
                    self.pending.push(byte);
                }
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn orgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn requests(events: &EventLog) -> Vec<String> {
        events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Request(org) => Some(org.clone()),
                Event::Line(_) => None,
            })
            .collect()
    }

    const SAMPLE: &str = r#"[
        {"full_name": "org/alpha", "created_at": "2020-01-01T00:00:00Z"},
        {"full_name": "org/beta", "created_at": "2021-06-15T12:30:00Z"}
    ]"#;

    #[tokio::test]
    async fn prints_one_line_per_record_under_queried_organization() {
        let events = EventLog::default();
        let source = CannedSource::new(events.clone()).with_body("kubernetes", SAMPLE);
        let mut out = Vec::new();

        let summary = list_and_print(&source, &orgs(&["kubernetes"]), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kubernetes/alpha, 2020-01-01T00:00:00Z\nkubernetes/beta, 2021-06-15T12:30:00Z\n"
        );
        assert_eq!(summary.repositories_printed, 2);
    }

    #[tokio::test]
    async fn nested_full_name_keeps_everything_after_first_slash() {
        let events = EventLog::default();
        let source = CannedSource::new(events).with_body(
            "kubernetes",
            r#"[{"full_name": "org/team/repo", "created_at": "2022-02-02T00:00:00Z"}]"#,
        );
        let mut out = Vec::new();

        list_and_print(&source, &orgs(&["kubernetes"]), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kubernetes/team/repo, 2022-02-02T00:00:00Z\n"
        );
    }

    #[tokio::test]
    async fn requests_each_default_organization_once_in_order() {
        let events = EventLog::default();
        let organizations = default_organizations();
        let mut source = CannedSource::new(events.clone());
        for org in &organizations {
            let body = format!(
                r#"[{{"full_name": "{org}/one", "created_at": "a"}}, {{"full_name": "{org}/two", "created_at": "b"}}]"#
            );
            source = source.with_body(org, &body);
        }
        let mut out = LoggingWriter {
            pending: Vec::new(),
            events: events.clone(),
        };

        let summary = list_and_print(&source, &organizations, &mut out)
            .await
            .unwrap();

        assert_eq!(requests(&events), organizations);
        assert_eq!(summary.organizations_listed, 11);

        // Every organization's lines land between its request and the next one.
        let expected: Vec<Event> = organizations
            .iter()
            .flat_map(|org| {
                [
                    Event::Request(org.clone()),
                    Event::Line(format!("{org}/one, a")),
                    Event::Line(format!("{org}/two, b")),
                ]
            })
            .collect();
        assert_eq!(*events.borrow(), expected);
    }

    #[tokio::test]
    async fn error_object_stops_the_run() {
        let events = EventLog::default();
        let source = CannedSource::new(events.clone())
            .with_body("kubernetes", SAMPLE)
            .with_body("kubernetes-client", r#"{"message": "Not Found"}"#);
        let mut out = Vec::new();

        let result = list_and_print(
            &source,
            &orgs(&["kubernetes", "kubernetes-client", "kubernetes-csi"]),
            &mut out,
        )
        .await;

        match result {
            Err(ListerError::Decode {
                organization,
                source: ListingError::Api { message },
            }) => {
                assert_eq!(organization, "kubernetes-client");
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
        assert_eq!(requests(&events), orgs(&["kubernetes", "kubernetes-client"]));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[tokio::test]
    async fn empty_listing_prints_nothing_and_continues() {
        let events = EventLog::default();
        let source = CannedSource::new(events.clone())
            .with_body("kubernetes-test", "[]")
            .with_body("kubernetes-tools", SAMPLE);
        let mut out = Vec::new();

        let summary = list_and_print(
            &source,
            &orgs(&["kubernetes-test", "kubernetes-tools"]),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(requests(&events), orgs(&["kubernetes-test", "kubernetes-tools"]));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kubernetes-tools/alpha, 2020-01-01T00:00:00Z\nkubernetes-tools/beta, 2021-06-15T12:30:00Z\n"
        );
        assert_eq!(
            summary.per_organization,
            vec![
                ("kubernetes-test".to_string(), 0),
                ("kubernetes-tools".to_string(), 2)
            ]
        );
    }

    #[tokio::test]
    async fn record_without_owner_fails_after_earlier_lines() {
        let events = EventLog::default();
        let source = CannedSource::new(events.clone()).with_body(
            "kubernetes",
            r#"[
                {"full_name": "kubernetes/good", "created_at": "x"},
                {"full_name": "bad", "created_at": "y"},
                {"full_name": "kubernetes/never", "created_at": "z"}
            ]"#,
        );
        let mut out = Vec::new();

        let result = list_and_print(&source, &orgs(&["kubernetes", "kubernetes-csi"]), &mut out).await;

        assert!(matches!(
            result,
            Err(ListerError::Decode {
                source: ListingError::MissingOwner { .. },
                ..
            })
        ));
        assert_eq!(String::from_utf8(out).unwrap(), "kubernetes/good, x\n");
        assert_eq!(requests(&events), orgs(&["kubernetes"]));
    }

    #[tokio::test]
    async fn page_capped_by_github_is_reported_as_full() {
        let records: Vec<String> = (0..100)
            .map(|i| format!(r#"{{"full_name": "kubernetes-sigs/repo-{i}", "created_at": "t"}}"#))
            .collect();
        let body = format!("[{}]", records.join(","));
        let source = CannedSource::new(EventLog::default())
            .with_body("kubernetes-sigs", &body)
            .with_body("kubernetes-csi", SAMPLE);
        let mut out = Vec::new();

        let summary = list_and_print(
            &source,
            &orgs(&["kubernetes-sigs", "kubernetes-csi"]),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(summary.repositories_printed, 102);
        assert_eq!(
            summary
                .full_page_organizations(DEFAULT_PER_PAGE)
                .collect::<Vec<_>>(),
            vec!["kubernetes-sigs"]
        );
    }

    #[tokio::test]
    async fn identical_responses_give_identical_output() {
        let organizations = orgs(&["kubernetes", "kubernetes-sigs"]);
        let mut runs = Vec::new();

        for _ in 0..2 {
            let source = CannedSource::new(EventLog::default())
                .with_body("kubernetes", SAMPLE)
                .with_body("kubernetes-sigs", SAMPLE);
            let mut out = Vec::new();
            list_and_print(&source, &organizations, &mut out)
                .await
                .unwrap();
            runs.push(out);
        }

        assert!(!runs[0].is_empty());
        assert_eq!(runs[0], runs[1]);
    }
}
