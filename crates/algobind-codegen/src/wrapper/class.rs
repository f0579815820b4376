//! TypeScript wrapper classes.
//!
//! Each class holds one backend instance and keeps a merged copy of its
//! parameters: defaults first, caller-supplied keys on top. Float-vector
//! parameters the caller supplies are converted with `arrayToVector` before
//! the merge; defaults are forwarded as declared.

use crate::artifact::GeneratedArtifact;
use crate::config::CodegenConfig;
use crate::error::CodegenResult;
use crate::normalize::NormalizedAlgorithm;
use crate::target::Target;
use crate::types::map_wrapper;

use super::{container_doc_type, escape_single_quotes, needs_vector_coercion, wrapper_literal};

/// Emits the wrapper class for one algorithm.
pub fn emit_wrapper_class(
    algo: &NormalizedAlgorithm,
    config: &CodegenConfig,
) -> CodegenResult<GeneratedArtifact> {
    let name = algo.name();
    let has_params = algo.has_parameters();
    let param_type = config.qualified_param_type(name);
    let param_arg = if has_params {
        format!("params: Partial<{}> = {{}}", param_type)
    } else {
        String::new()
    };
    let param_doc = format!("   * @param {{{}}} [params]", param_type);
    let forwarded = algo
        .descriptor
        .parameters
        .iter()
        .map(|p| format!("this.params.{}", p.name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut inputs = Vec::with_capacity(algo.inputs.len());
    let mut input_docs = Vec::with_capacity(algo.inputs.len());
    for input in &algo.inputs {
        let (arg_type, doc_type) = match container_doc_type(&input.type_tag) {
            Some(doc_type) => ("any", doc_type),
            None => {
                let mapped = map_wrapper(&input.type_tag)
                    .map_err(|e| e.for_field(name, &input.name))?;
                (mapped, mapped)
            }
        };
        inputs.push(format!("{}: {}", input.name, arg_type));
        input_docs.push(format!(
            "   * @param {{{}}} {} {}",
            doc_type, input.name, input.description
        ));
    }
    let untyped_inputs = algo
        .inputs
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let return_doc = format!(
        "   * @returns {{object}} {{{}}}",
        algo.outputs
            .iter()
            .map(|o| format!("{}: '{}'", o.name, escape_single_quotes(&o.description)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut lines = vec![
        "/**".to_string(),
        format!(
            "* {} Check {} for more details.",
            algo.descriptor.summary(),
            config.reference_url(name)
        ),
        "* @class".to_string(),
        "*/".to_string(),
        format!("class {} {{", name),
        "  private algoInstance: any;".to_string(),
    ];

    if has_params {
        lines.push(format!(
            "  private readonly defaultParams: {} = {{",
            param_type
        ));
        for param in &algo.descriptor.parameters {
            lines.push(format!("    {}: {},", param.name, wrapper_literal(param)));
        }
        lines.push("  };".to_string());
        lines.push(format!(
            "  private params: {} = {{ ...this.defaultParams }};",
            param_type
        ));
    }

    // constructor
    lines.push("  /**".to_string());
    lines.push("   * Creates an instance of the algorithm and initializes it by configuring with default or given params".to_string());
    lines.push("   * @constructor".to_string());
    if has_params {
        lines.push(param_doc.clone());
    }
    lines.push("  */".to_string());
    lines.push(format!("  constructor({}) {{", param_arg));
    if has_params {
        lines.push("    this.updateParams(params);".to_string());
    }
    lines.push(format!(
        "    this.algoInstance = new {}.{}({});",
        config.backend_var, name, forwarded
    ));
    lines.push("  }".to_string());

    // configure
    lines.push("  /**".to_string());
    lines.push("   * Configure algorithm with default or given params".to_string());
    lines.push("   * @method".to_string());
    if has_params {
        lines.push(param_doc);
    }
    lines.push(format!("   * @memberof {}", name));
    lines.push("  */".to_string());
    lines.push(format!("  configure({}) {{", param_arg));
    if has_params {
        lines.push("    this.updateParams(params);".to_string());
    }
    lines.push(format!("    this.algoInstance.configure({});", forwarded));
    lines.push("  }".to_string());

    // compute
    lines.push("  /**".to_string());
    lines.push("   * Execute algorithm with given inputs".to_string());
    lines.push("   * @method".to_string());
    lines.extend(input_docs);
    lines.push(return_doc);
    lines.push(format!("   * @memberof {}", name));
    lines.push("  */".to_string());
    lines.push(format!("  compute({}) {{", inputs.join(", ")));
    lines.push(format!(
        "    return this.algoInstance.compute({});",
        untyped_inputs
    ));
    lines.push("  }".to_string());

    // delete
    lines.push("  /**".to_string());
    lines.push("   * Delete algorithm instance".to_string());
    lines.push("   * @method".to_string());
    lines.push(format!("   * @memberof {}", name));
    lines.push("  */".to_string());
    lines.push("  delete() {".to_string());
    lines.push("    this.algoInstance.delete();".to_string());
    lines.push("  }".to_string());

    if has_params {
        lines.extend(update_params(algo, &param_type));
    }

    lines.push("}".to_string());

    Ok(GeneratedArtifact::new(name, Target::Wrapper, lines))
}

/// The private merge step shared by the constructor and `configure`.
fn update_params(algo: &NormalizedAlgorithm, param_type: &str) -> Vec<String> {
    let coerced: Vec<&str> = algo
        .descriptor
        .parameters
        .iter()
        .filter(|p| needs_vector_coercion(&p.type_tag))
        .map(|p| p.name.as_str())
        .collect();

    let mut lines = vec![format!(
        "  private updateParams(params: Partial<{}>) {{",
        param_type
    )];
    if coerced.is_empty() {
        lines.push("    this.params = { ...this.defaultParams, ...params };".to_string());
    } else {
        lines.push("    const supplied: any = { ...params };".to_string());
        for name in coerced {
            lines.push(format!("    if (supplied.{}) {{", name));
            lines.push(format!(
                "      supplied.{} = arrayToVector(supplied.{});",
                name, name
            ));
            lines.push("    }".to_string());
        }
        lines.push("    this.params = { ...this.defaultParams, ...supplied };".to_string());
    }
    lines.push("  }".to_string());
    lines
}
