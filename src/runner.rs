//! Sequential execution of the seeding workflow.
//!
//! Phases run in strict order with one in-flight request at a time. A create
//! failure is logged and skipped (the entry may already exist from an earlier
//! run); an authentication-class failure aborts the whole run, since every
//! later call would fail the same way.
use crate::auth;
use crate::cli::{CheckArgs, RunArgs, StatusArgs};
use crate::config::{SeedConfig, DEFAULT_LEDGER_PATH};
use crate::http::{Api, ApiClient, ApiError};
use crate::ledger::{Ledger, LedgerEntry};
use crate::phases::{self, Phase, RelationLink, SeedItem};
use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Read endpoint polled while waiting for the server to come up.
const REACHABILITY_PATH: &str = "/api/categories?pagination[pageSize]=1";

/// Wait for the CMS and verify credentials.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let config = SeedConfig::resolve(args.url.as_deref(), None)?;
    config.credentials.ensure_present()?;

    let api = ApiClient::new(&config.base_url);
    wait_for_server(
        &api,
        &config.base_url,
        args.wait_attempts,
        Duration::from_secs(args.wait_interval_secs),
        args.verbose,
    )?;

    let session = auth::authenticate(&api, &config.credentials)?;
    println!("ok: authenticated with {}", session.describe());
    Ok(())
}

/// Execute the selected seeding phases against the CMS.
pub fn run_run(args: &RunArgs) -> Result<()> {
    let config = SeedConfig::resolve(args.url.as_deref(), args.ledger.as_deref())?;
    config.credentials.ensure_present()?;
    let selected = select_phases(&args.phase)?;

    let api = ApiClient::new(&config.base_url);
    wait_for_server(
        &api,
        &config.base_url,
        args.wait_attempts,
        Duration::from_secs(args.wait_interval_secs),
        args.verbose,
    )?;

    let session = auth::authenticate(&api, &config.credentials)?;
    eprintln!("run: authenticated with {}", session.describe());

    let mut ledger = Ledger::load_or_default(&config.ledger_path)?;
    let mut report = RunReport::default();
    let delay = Duration::from_secs(args.phase_delay_secs);

    for (index, phase) in selected.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            if args.verbose {
                eprintln!("run: settling {}s before the next phase", delay.as_secs());
            }
            thread::sleep(delay);
        }
        eprintln!("run: phase {} ({})", phase.number(), phase.title());
        execute_phase(&api, session.token(), *phase, &mut ledger, &mut report, args.verbose)?;
        ledger
            .save(&config.ledger_path)
            .with_context(|| format!("persist ledger after phase {}", phase.number()))?;
    }

    eprintln!(
        "run: done ({} created, {} translated, {} published, {} linked, {} skipped)",
        report.created, report.translated, report.published, report.linked, report.skipped
    );
    println!(
        "seeded {} entries across {} content types (ledger: {})",
        ledger.total(),
        ledger.created.len(),
        config.ledger_path.display()
    );
    Ok(())
}

/// Summarize the local ledger.
pub fn run_status(args: &StatusArgs) -> Result<()> {
    let path = args
        .ledger
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH));
    let ledger = Ledger::load_or_default(&path)?;

    let counts: BTreeMap<&str, usize> = ledger
        .created
        .iter()
        .map(|(content_type, entries)| (content_type.as_str(), entries.len()))
        .collect();

    if args.json {
        let summary = json!({
            "ledger": path.display().to_string(),
            "total": ledger.total(),
            "created": counts,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if counts.is_empty() {
        println!("ledger {} is empty", path.display());
        return Ok(());
    }
    for (content_type, count) in &counts {
        println!("{content_type}: {count}");
    }
    println!("total: {}", ledger.total());
    Ok(())
}

/// Poll the server until any HTTP response arrives; 4xx still means the
/// server is up and answering.
pub(crate) fn wait_for_server(
    api: &dyn Api,
    base_url: &str,
    attempts: u32,
    interval: Duration,
    verbose: bool,
) -> Result<()> {
    let attempts = attempts.max(1);
    let mut last_reason = String::new();
    for attempt in 1..=attempts {
        match api.get(REACHABILITY_PATH, None) {
            Ok(_) => return Ok(()),
            Err(err) if !err.is_connectivity() => return Ok(()),
            Err(err) => {
                last_reason = err.to_string();
                if verbose {
                    eprintln!("wait: attempt {attempt}/{attempts}: {last_reason}");
                }
            }
        }
        if attempt < attempts {
            thread::sleep(interval);
        }
    }
    Err(anyhow!(
        "server at {base_url} is not reachable after {attempts} attempts ({last_reason}); \
         start the CMS or point {} elsewhere",
        crate::config::ENV_STRAPI_URL
    ))
}

/// Resolve `--phase` selections into execution order, or all phases when none
/// were given. Duplicates collapse; order on the command line does not matter.
pub(crate) fn select_phases(raw: &[String]) -> Result<Vec<Phase>> {
    if raw.is_empty() {
        return Ok(Phase::ALL.to_vec());
    }
    let mut selected = Vec::new();
    for value in raw {
        let phase = Phase::parse(value)?;
        if !selected.contains(&phase) {
            selected.push(phase);
        }
    }
    selected.sort();
    Ok(selected)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunReport {
    pub created: usize,
    pub translated: usize,
    pub published: usize,
    pub linked: usize,
    pub skipped: usize,
}

pub(crate) fn execute_phase(
    api: &dyn Api,
    token: &str,
    phase: Phase,
    ledger: &mut Ledger,
    report: &mut RunReport,
    verbose: bool,
) -> Result<()> {
    if phase == Phase::Relations {
        for link in phases::relation_links() {
            apply_link(api, token, &link, ledger, report, verbose)?;
        }
        return Ok(());
    }
    for item in phases::items_for(phase) {
        create_item(api, token, &item, ledger, report, verbose)?;
    }
    Ok(())
}

/// Create one entry, publish it, and add its translation.
///
/// Non-auth failures are warnings: the entry may already exist from an
/// earlier run, and the remote CMS is the source of truth either way.
fn create_item(
    api: &dyn Api,
    token: &str,
    item: &SeedItem,
    ledger: &mut Ledger,
    report: &mut RunReport,
    verbose: bool,
) -> Result<()> {
    let path = format!("/api/{}", item.content_type);
    let response = match api.post(&path, Some(token), &json!({"data": item.payload})) {
        Ok(response) => response,
        Err(err) => {
            return skip_or_abort(err, &format!("create {} {}", item.content_type, item.label), report);
        }
    };
    report.created += 1;

    let Some(entry) = LedgerEntry::from_response(&response.body, "en") else {
        tracing::warn!(
            content_type = item.content_type,
            label = %item.label,
            "create response carried no id; entry not recorded"
        );
        return Ok(());
    };
    if verbose {
        eprintln!("run:   created {} {} (id {})", item.content_type, item.label, entry.id);
    }
    let id = entry.id;
    ledger.record(item.content_type, entry);

    publish(api, token, item.content_type, id, report);

    if let Some(translation) = &item.translation {
        let path = format!("/api/{}/{id}/localizations", item.content_type);
        match api.post(&path, Some(token), translation) {
            Ok(response) => {
                report.translated += 1;
                if let Some(entry) = LedgerEntry::from_response(&response.body, "vi") {
                    publish(api, token, item.content_type, entry.id, report);
                    ledger.record(item.content_type, entry);
                }
            }
            Err(err) => {
                return skip_or_abort(
                    err,
                    &format!("translate {} {}", item.content_type, item.label),
                    report,
                );
            }
        }
    }
    Ok(())
}

/// Publish a created draft. Tolerated as a warning: some deployments
/// auto-publish on create and reject the action.
fn publish(api: &dyn Api, token: &str, content_type: &str, id: i64, report: &mut RunReport) {
    let path = format!("/api/{content_type}/{id}/actions/publish");
    match api.post(&path, Some(token), &json!({})) {
        Ok(_) => report.published += 1,
        Err(err) => {
            tracing::warn!(content_type, id, error = %err, "publish failed; entry left as draft");
        }
    }
}

/// Connect one ledger-recorded entry to its targets. Entries missing from the
/// ledger are skipped with a warning; the earlier phase that creates them may
/// not have run yet.
fn apply_link(
    api: &dyn Api,
    token: &str,
    link: &RelationLink,
    ledger: &Ledger,
    report: &mut RunReport,
    verbose: bool,
) -> Result<()> {
    let Some(source) = ledger.find_by_slug(link.content_type, link.slug) else {
        tracing::warn!(
            content_type = link.content_type,
            slug = link.slug,
            "not in the ledger; run its create phase first"
        );
        report.skipped += 1;
        return Ok(());
    };

    let mut target_ids = Vec::new();
    for slug in link.target_slugs.iter().copied() {
        match ledger.find_by_slug(link.target_type, slug) {
            Some(target) => target_ids.push(target.id),
            None => {
                tracing::warn!(
                    content_type = link.target_type,
                    slug,
                    "link target not in the ledger; dropped from {}",
                    link.slug
                );
            }
        }
    }
    if target_ids.is_empty() {
        report.skipped += 1;
        return Ok(());
    }

    let path = format!("/api/{}/{}", link.content_type, source.id);
    let body = json!({"data": {link.field: target_ids}});
    match api.put(&path, Some(token), &body) {
        Ok(_) => {
            report.linked += 1;
            if verbose {
                eprintln!(
                    "run:   linked {} {} -> {} {:?}",
                    link.content_type, link.slug, link.field, link.target_slugs
                );
            }
            Ok(())
        }
        Err(err) => skip_or_abort(err, &format!("link {} {}", link.content_type, link.slug), report),
    }
}

/// The run-level failure policy: auth-class errors abort, anything else is
/// logged and skipped.
fn skip_or_abort(err: ApiError, operation: &str, report: &mut RunReport) -> Result<()> {
    if err.is_auth_failure() {
        return Err(err).with_context(|| {
            format!("{operation}: authentication failed mid-run; aborting (recheck the token's permissions)")
        });
    }
    tracing::warn!(operation, error = %err, "skipped; entry may already exist");
    report.skipped += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{ok, status_err, unreachable_err, ScriptedApi};
    use serde_json::json;
    use std::cell::Cell;

    /// Responds to creates and localizations with fresh ids, and to publishes
    /// and reads with empty success.
    fn healthy_api() -> ScriptedApi {
        let next_id = Cell::new(0_i64);
        ScriptedApi::new(move |call| {
            if call.method == "POST" && !call.path.contains("/actions/publish") {
                let id = next_id.get() + 1;
                next_id.set(id);
                let payload = call.body.as_ref().unwrap();
                let attributes = payload.get("data").unwrap_or(payload);
                let mut body = json!({"data": {"id": id}});
                body["data"]["attributes"] = attributes.clone();
                return ok(200, body);
            }
            ok(200, json!({"ok": true}))
        })
    }

    #[test]
    fn foundation_phase_records_every_entry_and_translation() {
        let api = healthy_api();
        let mut ledger = Ledger::default();
        let mut report = RunReport::default();

        execute_phase(&api, "tok", Phase::Foundation, &mut ledger, &mut report, false).unwrap();

        assert_eq!(ledger.count("authors"), 2);
        assert_eq!(ledger.count("certifications"), 4);
        // Four categories, each with a Vietnamese translation.
        assert_eq!(ledger.count("categories"), 8);
        assert_eq!(report.created, 10);
        assert_eq!(report.translated, 4);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn rerun_against_a_loaded_ledger_keeps_the_same_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let api = healthy_api();
        let mut ledger = Ledger::default();
        let mut report = RunReport::default();
        execute_phase(&api, "tok", Phase::Foundation, &mut ledger, &mut report, false).unwrap();
        ledger.save(&path).unwrap();

        // Second run: the CMS rejects everything as already existing.
        let api = ScriptedApi::new(|call| {
            if call.method == "POST" && !call.path.contains("/actions/publish") {
                return status_err(400, "ValidationError", "This attribute must be unique");
            }
            ok(200, json!({"ok": true}))
        });
        let mut reloaded = Ledger::load_or_default(&path).unwrap();
        let mut report = RunReport::default();
        execute_phase(&api, "tok", Phase::Foundation, &mut reloaded, &mut report, false).unwrap();
        reloaded.save(&path).unwrap();

        let final_ledger = Ledger::load_or_default(&path).unwrap();
        assert_eq!(final_ledger.count("authors"), 2);
        assert_eq!(final_ledger.count("certifications"), 4);
        assert_eq!(final_ledger.count("categories"), 8);
        assert_eq!(report.created, 0);
        assert_eq!(report.skipped, 10);
    }

    #[test]
    fn validation_failure_skips_the_item_and_continues() {
        let next_id = Cell::new(100_i64);
        let api = ScriptedApi::new(move |call| {
            if call.method == "POST" && call.path == "/api/authors" {
                let payload = call.body.as_ref().unwrap();
                let slug = payload.pointer("/data/slug").and_then(|v| v.as_str());
                if slug == Some("nguyen-van-an") {
                    return status_err(400, "ValidationError", "This attribute must be unique");
                }
                let id = next_id.get() + 1;
                next_id.set(id);
                return ok(200, json!({"data": {"id": id, "attributes": payload["data"]}}));
            }
            if call.method == "POST" && !call.path.contains("/actions/publish") {
                let id = next_id.get() + 1;
                next_id.set(id);
                return ok(200, json!({"data": {"id": id}}));
            }
            ok(200, json!({"ok": true}))
        });

        let mut ledger = Ledger::default();
        let mut report = RunReport::default();
        execute_phase(&api, "tok", Phase::Foundation, &mut ledger, &mut report, false).unwrap();

        assert_eq!(ledger.count("authors"), 1);
        assert_eq!(report.skipped, 1);
        // The skipped author does not stop certifications or categories.
        assert_eq!(ledger.count("certifications"), 4);
    }

    #[test]
    fn auth_failure_aborts_the_phase_immediately() {
        let calls_before_failure = 2;
        let count = Cell::new(0_usize);
        let api = ScriptedApi::new(move |call| {
            if call.method == "POST" && !call.path.contains("/actions/publish") {
                let n = count.get() + 1;
                count.set(n);
                if n > calls_before_failure {
                    return status_err(405, "MethodNotAllowedError", "Method Not Allowed");
                }
                return ok(200, json!({"data": {"id": n as i64}}));
            }
            ok(200, json!({"ok": true}))
        });

        let mut ledger = Ledger::default();
        let mut report = RunReport::default();
        let err =
            execute_phase(&api, "tok", Phase::Foundation, &mut ledger, &mut report, false).unwrap_err();
        assert!(err.to_string().contains("authentication failed mid-run"));

        // Nothing after the failing call: two creates, their publishes, and
        // the one rejected create.
        let creates: Vec<_> = api
            .paths()
            .into_iter()
            .filter(|p| !p.contains("/actions/publish"))
            .collect();
        assert_eq!(creates.len(), calls_before_failure + 1);
    }

    #[test]
    fn explicit_auth_failure_message_also_aborts() {
        let api = ScriptedApi::new(|call| {
            if call.method == "POST" && !call.path.contains("/actions/publish") {
                return status_err(400, "ApplicationError", "Authentication failed");
            }
            ok(200, json!({"ok": true}))
        });

        let mut ledger = Ledger::default();
        let mut report = RunReport::default();
        let err =
            execute_phase(&api, "tok", Phase::Foundation, &mut ledger, &mut report, false).unwrap_err();
        assert!(err.to_string().contains("aborting"));
    }

    #[test]
    fn publish_failure_is_tolerated() {
        let next_id = Cell::new(0_i64);
        let api = ScriptedApi::new(move |call| {
            if call.path.contains("/actions/publish") {
                return status_err(404, "NotFoundError", "publish action not configured");
            }
            let id = next_id.get() + 1;
            next_id.set(id);
            ok(200, json!({"data": {"id": id}}))
        });

        let mut ledger = Ledger::default();
        let mut report = RunReport::default();
        execute_phase(&api, "tok", Phase::Foundation, &mut ledger, &mut report, false).unwrap();
        assert_eq!(report.published, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(ledger.count("authors"), 2);
    }

    #[test]
    fn relations_phase_resolves_slugs_through_the_ledger() {
        let mut ledger = Ledger::default();
        ledger.record(
            "products",
            LedgerEntry {
                id: 11,
                slug: Some("robusta-grade-1".to_string()),
                title: None,
                locale: "en".to_string(),
            },
        );
        ledger.record(
            "categories",
            LedgerEntry {
                id: 3,
                slug: Some("green-coffee".to_string()),
                title: None,
                locale: "en".to_string(),
            },
        );

        let api = ScriptedApi::new(|_| ok(200, json!({"ok": true})));
        let mut report = RunReport::default();
        execute_phase(&api, "tok", Phase::Relations, &mut ledger, &mut report, false).unwrap();

        let calls = api.calls();
        let put = calls.iter().find(|c| c.method == "PUT").unwrap();
        assert_eq!(put.path, "/api/products/11");
        assert_eq!(put.body.as_ref().unwrap(), &json!({"data": {"categories": [3]}}));
        assert_eq!(report.linked, 1);
        // Every link whose source or targets are missing is skipped, not fatal.
        assert!(report.skipped > 0);
    }

    #[test]
    fn wait_for_server_accepts_any_http_response() {
        let api = ScriptedApi::new(|_| status_err(403, "ForbiddenError", "Forbidden"));
        wait_for_server(&api, "http://localhost:1337", 3, Duration::ZERO, false).unwrap();
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn wait_for_server_retries_until_reachable() {
        let count = Cell::new(0_usize);
        let api = ScriptedApi::new(move |_| {
            let n = count.get() + 1;
            count.set(n);
            if n < 3 {
                return unreachable_err();
            }
            ok(200, json!({"data": []}))
        });
        wait_for_server(&api, "http://localhost:1337", 5, Duration::ZERO, false).unwrap();
        assert_eq!(api.calls().len(), 3);
    }

    #[test]
    fn wait_for_server_gives_up_after_the_attempt_limit() {
        let api = ScriptedApi::new(|_| unreachable_err());
        let err = wait_for_server(&api, "http://localhost:1337", 4, Duration::ZERO, false).unwrap_err();
        assert!(err.to_string().contains("not reachable after 4 attempts"));
        assert_eq!(api.calls().len(), 4);
    }

    #[test]
    fn select_phases_defaults_to_all_and_normalizes_order() {
        assert_eq!(select_phases(&[]).unwrap(), Phase::ALL.to_vec());

        let raw = vec!["pages".to_string(), "1".to_string(), "pages".to_string()];
        assert_eq!(select_phases(&raw).unwrap(), vec![Phase::Foundation, Phase::Pages]);

        assert!(select_phases(&["5".to_string()]).is_err());
    }
}
