//! Built-in kubectl command set
//!
//! The fixed seed transcript and default command registry shipped with
//! the dashboard console. This is configuration data handed to the
//! interpreter, not interpreter logic: the embedding application can use
//! it as-is, extend it, or replace it entirely.

use crate::config::Config;
use crate::console::{CommandRegistry, ConsoleSession, Matcher};

/// Transcript pre-populating a freshly opened console
pub fn seed_transcript() -> Vec<String> {
    [
        "$ kubectl get pods --all-namespaces",
        "NAMESPACE              NAME                                                        READY   STATUS    AGE",
        "battery-core           dashboard-fixed-6c94db6ddb-xqp9w                            1/1     Running   4h",
        "kubernetes-dashboard   kubernetes-dashboard-5c794bd9c8-n8z9k                       1/1     Running   4h",
        "istio-system          istiod-66ffbf9894-hk7j4                                     1/1     Running   4h",
        "",
        "$ kubectl get svc -n battery-core",
        "NAME              TYPE           CLUSTER-IP   EXTERNAL-IP   PORT(S)        AGE",
        "dashboard-fixed   LoadBalancer   10.2.0.163   4.157.150.5   80:30845/TCP   4h",
        "",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// The default registry: pods and nodes listings by substring match,
/// `clear` and `help` by exact match, in that declaration order.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register_lines(
        "get-pods",
        Matcher::contains("get pods"),
        [
            "NAME                                    READY   STATUS    RESTARTS   AGE",
            "control-server-dashboard-5d7fb6c9f4-x9kzl   1/1     Running   0          2h",
            "grafana-dashboard-7d8c6f7b5-mjwxp          1/1     Running   0          2h",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );

    registry.register_lines(
        "get-nodes",
        Matcher::contains("get nodes"),
        [
            "NAME                                STATUS   ROLES   AGE   VERSION",
            "aks-nodepool1-12345678-vmss000000   Ready    agent   4h    v1.29.0",
            "aks-nodepool1-12345678-vmss000001   Ready    agent   4h    v1.29.0",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );

    registry.register_clear("clear", Matcher::exact("clear"));

    registry.register_lines(
        "help",
        Matcher::exact("help"),
        [
            "Available commands:",
            "  kubectl get pods     - List all pods",
            "  kubectl get nodes    - List all nodes",
            "  kubectl get svc      - List all services",
            "  kubectl logs <pod>   - Show pod logs",
            "  clear               - Clear terminal",
            "  help                - Show this help",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );

    registry
}

/// Open a console session with the default registry, honoring the
/// configured limits and seeding the transcript when enabled.
pub fn demo_session(config: &Config) -> ConsoleSession {
    let session = ConsoleSession::with_config(default_registry(), config);
    if config.console.seed_transcript {
        session.with_seed(seed_transcript())
    } else {
        session
    }
}
