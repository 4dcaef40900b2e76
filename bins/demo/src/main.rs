//! Lifecycle demo.
//!
//! Walks an approvable document and a trackable project through their
//! workflows against an in-memory store, printing the transport view after
//! each persisted step.
//!
//! Run with: `RUST_LOG=lifecycle_demo=debug cargo run -p lifecycle-demo`

mod records;
mod store;

use anyhow::Context;
use lifecycle_core::{
    ActorContext, Approvable, Audited, EntityStatus, HttpVerb, LifecycleError, Trackable,
};
use lifecycle_shared::{AppConfig, AppError};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use records::{Document, Project};
use store::InMemoryStore;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifecycle_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(limits = ?config.audit.limits, "configuration loaded");

    approval_walkthrough(&config)?;
    status_walkthrough(&config)?;

    info!("demo complete");
    Ok(())
}

fn approval_walkthrough(config: &AppConfig) -> anyhow::Result<()> {
    let mut documents = InMemoryStore::new(config.audit.limits);
    let alice = ActorContext::user("alice", "10.0.0.7", "lifecycle-demo/0.1");
    let carol = ActorContext::user("carol", "10.0.0.9", "lifecycle-demo/0.1");

    let mut document = Document::new("Quarterly report");
    document.audit_trail_mut().set_actor(alice.clone());
    document
        .audit_trail_mut()
        .set_request("/documents", HttpVerb::Post);
    let document = documents.insert(document)?;
    print_view("document created", &document)?;
    let id = document.id().context("store did not assign an identity")?;

    let mut document = documents.load(id)?;
    document.submit_for_approval(alice.clone())?;
    document
        .audit_trail_mut()
        .set_request(format!("/documents/{id}/submit"), HttpVerb::Post);
    let document = documents.update(document)?;
    print_view("document submitted", &document)?;

    // Two reviewers read the same version; only the first write wins.
    let mut first = documents.load(id)?;
    let mut second = documents.load(id)?;

    first.approve(carol.clone())?;
    let approved = documents.update(first)?;
    print_view("document approved", &approved)?;

    second.reject(ActorContext::named("dave"), "needs another pass")?;
    match documents.update(second) {
        Err(err @ AppError::Conflict(_)) => {
            warn!(code = err.error_code(), status = err.status_code(), "{err}");
        }
        other => anyhow::bail!("expected a stale write conflict, got {other:?}"),
    }

    // Approved documents can be revoked but not rejected.
    let mut document = documents.load(id)?;
    if let Err(err) = document.reject(carol.clone(), "too late") {
        report_rejected_transition(err);
    }
    document.revoke(carol, "figures restated")?;
    let document = documents.update(document)?;
    print_view("document revoked", &document)?;

    let mut document = documents.load(id)?;
    document.audit_trail_mut().set_actor(alice);
    document
        .audit_trail_mut()
        .set_request(format!("/documents/{id}"), HttpVerb::Delete);
    let snapshot = documents.delete(document)?;
    println!(
        "document deleted:\n{}",
        serde_json::to_string_pretty(&snapshot)?
    );
    Ok(())
}

fn status_walkthrough(config: &AppConfig) -> anyhow::Result<()> {
    let mut projects = InMemoryStore::new(config.audit.limits);
    let bob = ActorContext::named("bob");

    let mut project = Project::new("Migration");
    project.audit_trail_mut().set_actor(bob.clone());
    let project = projects.insert(project)?;
    let id = project.id().context("store did not assign an identity")?;

    for target in [
        EntityStatus::Pending,
        EntityStatus::Active,
        EntityStatus::Suspended,
        EntityStatus::Active,
    ] {
        let mut project = projects.load(id)?;
        project.update_status(target, bob.clone())?;
        projects.update(project)?;
    }

    let mut project = projects.load(id)?;
    if let Err(err) = project.update_status(EntityStatus::Draft, bob.clone()) {
        report_rejected_transition(err);
    }
    project.update_status(EntityStatus::Archived, bob)?;
    let project = projects.update(project)?;
    print_view("project archived", &project)?;

    // Nobody sets an actor here; the trail falls back to the system principal.
    let housekeeping = projects.insert(Project::system_managed("Nightly cleanup"))?;
    print_view("system project created", &housekeeping)?;

    info!(stored = projects.len(), "status walkthrough done");
    Ok(())
}

fn report_rejected_transition(err: LifecycleError) {
    let code = err.error_code();
    let app = AppError::from(err);
    warn!(code, status = app.status_code(), "{app}");
}

fn print_view<T: Audited>(label: &str, record: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&record.to_transport_view())?;
    println!("{label}:\n{json}");
    Ok(())
}
