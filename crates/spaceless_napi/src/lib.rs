#![deny(clippy::all)]

#[cfg(not(all(target_os = "linux", target_env = "musl", target_arch = "aarch64")))]
#[global_allocator]
static ALLOC: mimalloc_rust::GlobalMiMalloc = mimalloc_rust::GlobalMiMalloc;

mod structs;

use napi::bindgen_prelude::*;
use napi_derive::napi;

pub use structs::{SpacelessJsOptions, SpacelessJsResult};

/// Strips whitespace from `spaceless` and `inline` tagged templates of a module
#[napi]
pub fn transform_sync(
    source: String,
    options: Option<SpacelessJsOptions>,
) -> Result<SpacelessJsResult> {
    let options = options.unwrap_or_default().into_transform_options();

    spaceless::transform_sync(&source, &options)
        .map(SpacelessJsResult::from)
        .map_err(|e| Error::from_reason(e.to_string()))
}
