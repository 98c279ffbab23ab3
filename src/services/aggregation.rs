//! Aggregation pipeline
//!
//! Collects the exports of a run, classifies every row and feeds the totals of
//! the export's scope. Accumulators are passed into and returned from each
//! step; nothing is held in shared state between exports or runs.

use crate::error::{BalanceError, BalanceResult};
use crate::models::{ExportKind, Record, Scope, ScopeAccumulator, ScopeSnapshot};
use crate::services::classifier::classify;
use crate::services::import::parse_export;
use crate::sources::{ExportRequest, ExportSource};

/// Raw output of one export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub request: ExportRequest,
    pub body: String,
}

/// The exports a daily run pulls: six day-filtered, two unfiltered
pub fn run_plan() -> Vec<ExportRequest> {
    let daily = ExportKind::ALL
        .into_iter()
        .map(|kind| ExportRequest::new(kind, Scope::Daily));
    let lifetime = [ExportKind::Payments, ExportKind::Forwards]
        .into_iter()
        .map(|kind| ExportRequest::new(kind, Scope::Lifetime));
    daily.chain(lifetime).collect()
}

/// Fetch every planned export in order
///
/// The first failing call aborts collection; nothing is aggregated from a
/// partially collected run.
pub fn collect_exports(
    source: &dyn ExportSource,
    plan: &[ExportRequest],
) -> BalanceResult<Vec<ExportBlob>> {
    let mut blobs = Vec::with_capacity(plan.len());
    for request in plan {
        let body = source.fetch(request)?;
        log::info!(
            "Fetched {} {} export ({} bytes)",
            request.scope,
            request.kind,
            body.len()
        );
        blobs.push(ExportBlob {
            request: *request,
            body,
        });
    }
    Ok(blobs)
}

/// Classify the records of one export into an accumulator
pub fn feed_records(
    mut acc: ScopeAccumulator,
    kind: ExportKind,
    records: &[Record],
) -> ScopeAccumulator {
    let mut attributed = 0usize;

    for (idx, record) in records.iter().enumerate() {
        let Some(classification) = classify(kind, &record.transaction_type, &record.notes) else {
            continue;
        };

        if kind.attributes_first_row_only() && attributed > 0 {
            log::debug!(
                "Skipping {} row {} ({}): only the first annotated row is counted",
                kind,
                idx + 1,
                record.notes
            );
            continue;
        }

        let category = classification.category;
        acc.add(category, record.amount);
        attributed += 1;

        if category.is_itemized() {
            let transaction_type = category
                .breakdown_type()
                .unwrap_or(record.transaction_type.as_str());
            acc.append_breakdown(
                category,
                classification.label.unwrap_or_default(),
                record.amount,
                transaction_type,
            );
        }
    }

    log::debug!(
        "{} {} export: {} of {} rows attributed",
        acc.scope(),
        kind,
        attributed,
        records.len()
    );
    acc
}

/// Totals of a run, frozen, plus the exports that could not be used
#[derive(Debug)]
pub struct Aggregation {
    pub daily: ScopeSnapshot,
    pub lifetime: ScopeSnapshot,
    pub failures: Vec<BalanceError>,
}

impl Aggregation {
    /// Whether every export contributed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregate collected exports into the Daily and Lifetime scopes
///
/// Each blob is processed exactly once. A malformed export contributes
/// nothing and is reported in `failures`; totals already committed from
/// other exports stay.
pub fn aggregate(blobs: &[ExportBlob]) -> Aggregation {
    let mut daily = ScopeAccumulator::new(Scope::Daily);
    let mut lifetime = ScopeAccumulator::new(Scope::Lifetime);
    let mut failures = Vec::new();

    for blob in blobs {
        let kind = blob.request.kind;
        let records = match parse_export(kind, &blob.body) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Dropping {} {} export: {}", blob.request.scope, kind, e);
                failures.push(e);
                continue;
            }
        };

        match blob.request.scope {
            Scope::Daily => daily = feed_records(daily, kind, &records),
            Scope::Lifetime => lifetime = feed_records(lifetime, kind, &records),
        }
    }

    Aggregation {
        daily: daily.freeze(),
        lifetime: lifetime.freeze(),
        failures,
    }
}
