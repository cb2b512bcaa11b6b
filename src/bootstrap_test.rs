use super::*;
use crate::state::session::User;

use std::cell::RefCell;

fn ctx(pass: RenderPass) -> AppContext {
    AppContext { session: SessionStore::new(), pass }
}

fn signed_in_state() -> SessionState {
    SessionState {
        user: Some(User { id: Some("u-1".to_owned()), name: Some("Riley".to_owned()) }),
        connected: true,
    }
}

// =============================================================
// Module installation
// =============================================================

thread_local! {
    static INSTALL_LOG: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record_first(_ctx: &AppContext) {
    INSTALL_LOG.with_borrow_mut(|log| log.push("first"));
}

fn record_second(_ctx: &AppContext) {
    INSTALL_LOG.with_borrow_mut(|log| log.push("second"));
}

#[test]
fn initializers_run_once_in_registration_order() {
    INSTALL_LOG.with_borrow_mut(Vec::clear);

    install(&ctx(RenderPass::Client), &[record_first, record_second]);

    INSTALL_LOG.with_borrow(|log| assert_eq!(*log, ["first", "second"]));
}

#[test]
fn empty_initializer_list_is_a_no_op() {
    install(&ctx(RenderPass::Server), &[]);
}

// =============================================================
// Server pass
// =============================================================

#[test]
fn server_pass_exports_a_decodable_snapshot() {
    let ctx = ctx(RenderPass::Server);
    ctx.session.replace(signed_in_state());

    let payload = transfer(&ctx, None);
    let decoded = crate::handoff::decode_state(&payload).expect("payload should decode");
    assert_eq!(decoded, signed_in_state());
}

#[test]
fn server_pass_exports_the_default_state_untouched() {
    let ctx = ctx(RenderPass::Server);

    let payload = transfer(&ctx, None);
    let decoded = crate::handoff::decode_state(&payload).expect("payload should decode");
    assert_eq!(decoded, SessionState::default());
}

// =============================================================
// Client pass
// =============================================================

#[test]
fn client_pass_replaces_store_from_inbound_payload() {
    let server = ctx(RenderPass::Server);
    server.session.replace(signed_in_state());
    let payload = transfer(&server, None);

    let client = ctx(RenderPass::Client);
    let re_embedded = transfer(&client, Some(payload.clone()));

    assert_eq!(client.session.get(), signed_in_state());
    assert_eq!(re_embedded, payload);
}

#[test]
fn client_pass_without_payload_keeps_default_state() {
    let client = ctx(RenderPass::Client);
    let payload = transfer(&client, None);

    assert_eq!(client.session.get(), SessionState::default());
    let decoded = crate::handoff::decode_state(&payload).expect("fallback should decode");
    assert_eq!(decoded, SessionState::default());
}

#[test]
fn client_pass_discards_malformed_payload() {
    let client = ctx(RenderPass::Client);
    client.session.replace(SessionState::default());

    let re_embedded = transfer(&client, Some("{not json".to_owned()));

    assert_eq!(client.session.get(), SessionState::default());
    assert_eq!(re_embedded, "{not json");
}
