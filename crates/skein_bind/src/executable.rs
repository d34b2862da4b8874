//! Assembling an executable schema from a document and declarations.

use skein_foundation::Result;
use skein_schema::{Schema, build_schema, set_default_resolvers};
use skein_sdl::SchemaDocument;
use tracing::{debug, info};

use crate::config::BindConfig;
use crate::declaration::Declaration;

/// Builds a schema from `document` and attaches every declaration to it.
///
/// Declarations that are not bound yet are bound against `document` with
/// `config` first. Every type node of each bound inline fragment is then
/// added to the schema, so fragment-only types and extension fields can
/// receive resolvers. `schema` blocks inside fragments are ignored. When [`BindConfig::default_resolvers`] is set, fields
/// left without a resolver receive one that reads the same-named key from
/// the parent value.
///
/// # Errors
/// Returns the first schema build, binding, or attach error. No partial
/// schema is returned.
pub fn make_executable_schema<'a, I>(
    document: &SchemaDocument,
    declarations: I,
    config: &BindConfig,
) -> Result<Schema>
where
    I: IntoIterator<Item = &'a Declaration>,
{
    let mut schema = build_schema(document)?;

    let declarations: Vec<&Declaration> = declarations.into_iter().collect();
    let mut fragments = Vec::new();
    for declaration in &declarations {
        let bound = match declaration.bound() {
            Some(bound) => bound,
            None => declaration.bind_with(document, config)?,
        };
        if let Some(fragment) = &bound.fragment {
            fragments.push(fragment.clone());
        }
    }

    if !fragments.is_empty() {
        schema.extend_with_nodes(fragments.iter().flat_map(|f| f.type_nodes()))?;
        debug!(fragments = fragments.len(), "inline fragments applied");
    }

    for declaration in &declarations {
        declaration.attach(&mut schema)?;
    }
    let attached = declarations.len();

    let defaulted = if config.default_resolvers {
        set_default_resolvers(&mut schema)
    } else {
        debug!("default resolvers disabled");
        0
    };

    info!(
        types = schema.len(),
        declarations = attached,
        defaulted,
        "executable schema ready"
    );
    Ok(schema)
}
