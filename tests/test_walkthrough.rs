//! End-to-end session walkthrough: triage → documents → outreach →
//! assets → legal application → closing. Exercises the same sequence a
//! user clicks through, with zero simulated latency.

use estate_pilot::config::Config;
use estate_pilot::state::modules::{
    MODULE_ASSETS, MODULE_CLOSING, MODULE_DOCUMENTS, MODULE_LEGAL, ModuleStatus,
};
use estate_pilot::state::triage::{TriageAnswers, TriageResult, LegalPath, classify};
use estate_pilot::state::banks::OutreachStatus;
use estate_pilot::workbench::Workbench;

fn answered(pairs: &[(&str, &str)]) -> TriageAnswers {
    let mut a = TriageAnswers::new();
    for (q, o) in pairs {
        a.answer(q, o);
    }
    a
}

#[tokio::test]
async fn probate_session_end_to_end() {
    let wb = Workbench::new(&Config::test_default()).unwrap();
    let state = wb.state();

    // ── triage ────────────────────────────────────────────────────────
    let answers = answered(&[
        ("religion", "no"),
        ("will", "yes"),
        ("value", "above50k"),
        ("relationship", "child"),
    ]);
    assert_eq!(classify(&answers), LegalPath::Probate);
    {
        let mut st = state.lock().await;
        st.set_triage_result(TriageResult::from_answers(&answers));
        let m3 = st.module(MODULE_LEGAL).unwrap();
        assert_eq!(m3.description, "Grant of Probate");
        // will confirmed → three visible documents
        assert_eq!(st.module(MODULE_DOCUMENTS).unwrap().total, 3);
    }

    // ── core documents ────────────────────────────────────────────────
    {
        let mut st = state.lock().await;
        st.set_document_uploaded("death-cert", true);
        st.set_document_uploaded("deceased-nric", true);
        assert_eq!(st.module(MODULE_DOCUMENTS).unwrap().status, ModuleStatus::InProgress);
        assert_eq!(st.module(MODULE_ASSETS).unwrap().status, ModuleStatus::Locked);

        st.set_document_uploaded("will-copy", true);
        assert_eq!(st.module(MODULE_DOCUMENTS).unwrap().status, ModuleStatus::Completed);
        assert_eq!(st.module(MODULE_ASSETS).unwrap().status, ModuleStatus::Pending);
    }

    // ── outreach ──────────────────────────────────────────────────────
    let blast = wb.generate_letters().await.unwrap();
    assert_eq!(blast.institutions, 6);

    let report = wb.scan_bank_reply("dbs").await.unwrap();
    assert_eq!(report.value, 12_500);

    {
        let mut st = state.lock().await;
        st.update_bank_status("ocbc", OutreachStatus::ReplyNotFound);
        assert_eq!(
            st.banks.iter().find(|b| b.id == "ocbc").unwrap().status,
            OutreachStatus::ReplyNotFound
        );
    }

    // ── assets ────────────────────────────────────────────────────────
    {
        let mut st = state.lock().await;
        st.set_asset_document_uploaded("insurance-plan", true);
        assert_eq!(st.total_estate_value(), 162_500);
        assert_eq!(st.module(MODULE_ASSETS).unwrap().status, ModuleStatus::Completed);
        assert_eq!(st.module(MODULE_LEGAL).unwrap().status, ModuleStatus::Pending);

        // one row per source
        assert!(st.discovered_assets.iter().any(|a| a.id == "bank-dbs"));
        assert!(st.discovered_assets.iter().any(|a| a.id == "insurance-plan"));
    }

    // ── legal application ─────────────────────────────────────────────
    assert!(wb.compile_court_bundle().await);
    assert!(wb.download_court_bundle().await);
    {
        let st = state.lock().await;
        let m3 = st.module(MODULE_LEGAL).unwrap();
        assert_eq!(m3.status, ModuleStatus::Completed);
        assert_eq!(m3.progress, 3);

        let bundle = st.court_bundle.as_ref().unwrap();
        assert!(bundle.documents.iter().any(|d| d.id == "probate-app"));
    }

    // ── closing ───────────────────────────────────────────────────────
    {
        let mut st = state.lock().await;
        for id in [
            "sp-group", "pub", "singtel", "starhub", "m1", "netflix", "spotify", "disney",
            "facebook", "instagram", "google", "linkedin",
        ] {
            st.toggle_closing_item(id);
        }
        let m4 = st.module(MODULE_CLOSING).unwrap();
        assert_eq!(m4.status, ModuleStatus::Completed);
        assert_eq!(m4.progress, 12);

        // every module done
        assert!(
            st.modules
                .iter()
                .filter(|m| m.id != MODULE_DOCUMENTS)
                .all(|m| m.status == ModuleStatus::Completed)
        );
    }
}

#[tokio::test]
async fn public_trustee_session_uses_loa_bundle() {
    let wb = Workbench::new(&Config::test_default()).unwrap();
    let state = wb.state();

    let answers = answered(&[
        ("religion", "no"),
        ("will", "no"),
        ("value", "below50k"),
        ("relationship", "spouse"),
    ]);
    assert_eq!(classify(&answers), LegalPath::PublicTrustee);

    let mut st = state.lock().await;
    st.set_triage_result(TriageResult::from_answers(&answers));
    assert_eq!(st.module(MODULE_LEGAL).unwrap().description, "Public Trustee Application");
    // no confirmed will → the will copy stays hidden
    assert_eq!(st.module(MODULE_DOCUMENTS).unwrap().total, 2);
    // non-probate pathways share the administrator bundle
    let bundle = st.court_bundle.as_ref().unwrap();
    assert!(bundle.documents.iter().any(|d| d.id == "orig-summons"));
}

#[tokio::test]
async fn estate_total_invariant_across_full_session() {
    let wb = Workbench::new(&Config::test_default()).unwrap();
    let state = wb.state();

    wb.scan_bank_reply("dbs").await.unwrap();
    wb.scan_bank_reply("uob").await.unwrap();
    {
        let mut st = state.lock().await;
        st.set_asset_document_uploaded("property-lease", true);
        st.set_asset_document_uploaded("vehicle-registration", true);
        st.set_asset_document_uploaded("property-lease", false);
    }
    wb.scan_bank_reply("dbs").await.unwrap(); // re-scan replaces, not duplicates

    let st = state.lock().await;
    let doc_sum: u64 = st.asset_documents.iter().filter(|d| d.uploaded).map(|d| d.value).sum();
    let bank_sum: u64 = st.bank_assets.values().sum();
    assert_eq!(st.total_estate_value(), doc_sum + bank_sum);
    assert_eq!(st.total_estate_value(), 35_000 + 12_500 + 5_000);
}
