// SPDX-FileCopyrightText: 2026 Facework Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in face catalog.
//!
//! Returns hardcoded manifests for the faces compiled into the binary. No
//! files are read.

use facework_core::{Action, DEFAULT_FACE_VERSION, Terminus};
use semver::Version;

use crate::manifest::{FaceManifest, IndirectionManifest};

fn face(
    name: &str,
    summary: &str,
    terminuses: Option<&[&str]>,
    actions: &[(&str, &str)],
) -> FaceManifest {
    FaceManifest {
        name: name.to_string(),
        version: DEFAULT_FACE_VERSION,
        summary: summary.to_string(),
        actions: actions
            .iter()
            .map(|(name, summary)| Action::new(*name).with_summary(*summary))
            .collect(),
        indirection: terminuses.map(|t| IndirectionManifest {
            terminuses: t.iter().map(|n| Terminus::new(*n)).collect(),
        }),
    }
}

/// Returns manifests for all built-in faces.
///
/// Every built-in face is at version `0.0.1` except `parser`, which has moved
/// on to `0.1.0` and therefore resolves no actions at the default version.
/// `config` and `help` have no indirection.
pub fn builtin_catalog() -> Vec<FaceManifest> {
    let mut parser = face(
        "parser",
        "Interact directly with the manifest parser",
        None,
        &[("validate", "Validate the syntax of one or more manifests")],
    );
    parser.version = Version::new(0, 1, 0);

    vec![
        face(
            "catalog",
            "Compile, save, view, and convert catalogs",
            Some(&["compiler", "json", "queue", "rest", "yaml"]),
            &[
                ("apply", "Apply a catalog"),
                ("download", "Download this node's catalog"),
                ("find", "Retrieve the catalog for a node"),
                ("info", "Print the default terminus class"),
                ("save", "Store the catalog for a node"),
                ("search", "Search for catalogs"),
                ("select", "Retrieve a catalog and filter it for resources"),
            ],
        ),
        face(
            "certificate",
            "Provide access to the certificate authority",
            Some(&["ca", "file", "rest"]),
            &[
                ("destroy", "Delete a certificate"),
                ("find", "Retrieve a certificate"),
                ("generate", "Generate a new certificate signing request"),
                ("list", "List all certificate signing requests"),
                ("sign", "Sign a certificate signing request"),
            ],
        ),
        face(
            "config",
            "Interact with configuration settings",
            None,
            &[("print", "Examine configuration settings")],
        ),
        face(
            "facts",
            "Retrieve and store facts",
            Some(&["couch", "facter", "memory", "rest", "yaml"]),
            &[
                ("find", "Retrieve a node's facts"),
                ("save", "Store a node's facts"),
                ("upload", "Upload local facts to the server"),
            ],
        ),
        face(
            "file",
            "Retrieve and store files in a filebucket",
            Some(&["file", "rest"]),
            &[
                ("destroy", "Delete a file"),
                ("download", "Download a file into the local filebucket"),
                ("find", "Retrieve a file from the filebucket"),
                ("info", "Print the default terminus class"),
                ("save", "Store a file in the filebucket"),
                ("search", "Search for files"),
                ("store", "Store a local file in the filebucket"),
            ],
        ),
        face(
            "help",
            "Display help about faces and their actions",
            None,
            &[("help", "Display help about a face or action")],
        ),
        face(
            "node",
            "View and manage node definitions",
            Some(&["exec", "ldap", "memory", "plain", "rest", "yaml"]),
            &[
                ("clean", "Clean up everything a server knows about a node"),
                ("find", "Retrieve a node object"),
                ("info", "Print the default terminus class"),
            ],
        ),
        parser,
        face(
            "report",
            "Create, display, and submit reports",
            Some(&["processor", "rest", "yaml"]),
            &[
                ("save", "Store a report"),
                ("submit", "Submit a report to the server"),
            ],
        ),
    ]
}
