// ─── java-locator core ───
// Finds the Java runtimes installed on a machine for a Minecraft launcher.
//
// Architecture:
//   core/
//     java/
//       paths     — Platform, executable suffix, vanilla launcher layout
//       probe     — `java -version` runner + version banner parser
//       registry  — Version-indexed, deduplicated installation set
//       sources   — PATH, vanilla launcher and JAVA_HOME scans
//       discovery — Fixed-order orchestration + public entry points
//       env       — Injected environment access
//       options   — Discovery tunables
//     error       — Crate-wide error type

pub mod error;
pub mod java;
