//! Availability endpoint.

/// Fixed availability string for `GET /`.
///
/// Used by frontends and probes to confirm the relay is reachable. Always
/// succeeds, regardless of provider or stored state.
pub async fn home() -> &'static str {
    "Snoozeless backend is running ✅"
}
