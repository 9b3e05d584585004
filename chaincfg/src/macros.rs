// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Write template files into `$root`, skipping any file which already exists.
///
/// Evaluates to the list of paths which were written.
macro_rules! copy_from_template_if_dne {
    ($tmpl:literal -> $root:ident, $($files:expr),* $(,)?) => {{
        let mut written = Vec::new();
        $(
            let filename = $root.join($files);
            if !filename.exists() {
                std::fs::write(
                    &filename,
                    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $tmpl, "/", $files)),
                )?;
                written.push(filename);
            }
        )*
        written
    }};
}

macro_rules! debug {
    (@$color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        log::debug!("{}", msg.$color())
    }};
}

macro_rules! info {
    (@$color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        log::info!("{}", msg.$color())
    }};
}

macro_rules! warn {
    (@$color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        let msg = format!($($msg),*);
        log::warn!("{}", msg.$color())
    }};
}
