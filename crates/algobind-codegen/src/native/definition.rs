//! Class definitions for the native source file.
//!
//! Each class owns one `Algorithm*` handle created through
//! `AlgorithmFactory::create`. `compute` binds inputs and outputs to the
//! handle's named slots, runs it, and returns every output in a `val`
//! object keyed by the output's catalog name.

use crate::artifact::GeneratedArtifact;
use crate::config::CodegenConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::normalize::NormalizedAlgorithm;
use crate::target::Target;
use crate::types::{map_native, native_value_type};

use super::{flattened_params, render_inputs, render_params, ParamStyle, COMPUTE_RETURN_TYPE};

/// Emits the class definition for one algorithm, wrapped in START/END
/// marker comments that point at the upstream reference page.
pub fn emit_definition(
    algo: &NormalizedAlgorithm,
    config: &CodegenConfig,
) -> CodegenResult<GeneratedArtifact> {
    let name = algo.name();
    let handle = &algo.handle;
    let params = render_params(algo, ParamStyle::Plain)?;
    let inputs = render_inputs(algo)?;
    let factory_call = factory_create(algo);

    let mut lines = vec![
        format!("// START {} definitions", name),
        format!("// check {}", config.reference_url(name)),
    ];

    // constructor
    lines.push(format!("{}::{}({}) {{", name, name, params));
    lines.push(format!("\t{} = {};", handle, factory_call));
    lines.push("}".to_string());

    // destructor
    lines.push(format!("{}::~{}() {{", name, name));
    lines.push(format!("\tif ({}) delete {};", handle, handle));
    lines.push("}".to_string());

    // configure
    lines.push(format!("void {}::configure({}) {{", name, params));
    if algo.has_parameters() && config.recreates_on_configure(name) {
        lines.push(format!("\tif ({}) delete {};", handle, handle));
        lines.push(format!("\t{} = {};", handle, factory_call));
    } else {
        lines.push(format!(
            "\t{}->configure({});",
            handle,
            flattened_params(algo)
        ));
    }
    lines.push("}".to_string());

    // compute
    lines.push(format!(
        "{} {}::compute({}) {{",
        COMPUTE_RETURN_TYPE, name, inputs
    ));
    for input in &algo.inputs {
        lines.push(format!(
            "\t{}->input(\"{}\").set({});",
            handle, input.name, input.ident
        ));
    }
    lines.extend(compute_outputs(algo)?);
    lines.push("}".to_string());

    // reset
    lines.push(format!("void {}::reset() {{", name));
    lines.push(format!("\t{}->reset();", handle));
    lines.push("}".to_string());

    lines.push(format!("// END {} definitions", name));

    Ok(GeneratedArtifact::new(name, Target::Definition, lines))
}

/// `AlgorithmFactory::create("Name", "p1", p1, ...)`, or just the name when
/// the algorithm has no parameters.
fn factory_create(algo: &NormalizedAlgorithm) -> String {
    if algo.has_parameters() {
        format!(
            "AlgorithmFactory::create(\"{}\", {})",
            algo.name(),
            flattened_params(algo)
        )
    } else {
        format!("AlgorithmFactory::create(\"{}\")", algo.name())
    }
}

/// Output declarations and bindings, the compute call, and the packaging of
/// results into the returned `val`.
fn compute_outputs(algo: &NormalizedAlgorithm) -> CodegenResult<Vec<String>> {
    let name = algo.name();
    let handle = &algo.handle;

    let mut declarations = Vec::with_capacity(algo.outputs.len());
    let mut bindings = Vec::with_capacity(algo.outputs.len());
    for output in &algo.outputs {
        let native =
            map_native(&output.type_tag).map_err(|e| e.for_field(name, &output.name))?;
        declarations.push(format!("\t{} {};", native_value_type(native), output.ident));
        bindings.push(format!(
            "\t{}->output(\"{}\").set({});",
            handle, output.name, output.ident
        ));
    }

    if bindings.is_empty() {
        return Err(CodegenError::missing_outputs(name));
    }

    let result_var = format!("output{}", name);
    let mut lines = declarations;
    lines.extend(bindings);
    lines.push(format!("\t{}->compute();", handle));
    lines.push(format!(
        "\t{} {}(val::object());",
        COMPUTE_RETURN_TYPE, result_var
    ));
    for output in &algo.outputs {
        lines.push(format!(
            "\t{}.set(\"{}\", {});",
            result_var, output.name, output.ident
        ));
    }
    lines.push(format!("\treturn {};", result_var));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobind_catalog::{AlgorithmDescriptor, TypeTag};
    use pretty_assertions::assert_eq;

    fn normalized(desc: AlgorithmDescriptor) -> NormalizedAlgorithm {
        NormalizedAlgorithm::from_descriptor(desc, &CodegenConfig::default()).unwrap()
    }

    fn windowing() -> NormalizedAlgorithm {
        normalized(
            AlgorithmDescriptor::builder("Windowing")
                .input("signal", TypeTag::VectorReal, "the input audio frame")
                .output("signal", TypeTag::VectorReal, "the windowed audio frame")
                .param("type", TypeTag::String, "hann", "the window type")
                .build(),
        )
    }

    #[test]
    fn test_windowing_definition() {
        let artifact = emit_definition(&windowing(), &CodegenConfig::default()).unwrap();
        let expected = vec![
            "// START Windowing definitions",
            "// check https://essentia.upf.edu/reference/std_Windowing.html",
            "Windowing::Windowing(const std::string& type) {",
            "\t_windowing = AlgorithmFactory::create(\"Windowing\", \"type\", type);",
            "}",
            "Windowing::~Windowing() {",
            "\tif (_windowing) delete _windowing;",
            "}",
            "void Windowing::configure(const std::string& type) {",
            "\t_windowing->configure(\"type\", type);",
            "}",
            "val Windowing::compute(std::vector<float>& input_signal) {",
            "\t_windowing->input(\"signal\").set(input_signal);",
            "\tstd::vector<float> output_signal;",
            "\t_windowing->output(\"signal\").set(output_signal);",
            "\t_windowing->compute();",
            "\tval outputWindowing(val::object());",
            "\toutputWindowing.set(\"signal\", output_signal);",
            "\treturn outputWindowing;",
            "}",
            "void Windowing::reset() {",
            "\t_windowing->reset();",
            "}",
            "// END Windowing definitions",
        ];
        assert_eq!(artifact.lines, expected);
    }

    #[test]
    fn test_zero_parameter_factory_and_configure() {
        let algo = normalized(
            AlgorithmDescriptor::builder("Energy")
                .input("array", TypeTag::VectorReal, "the input array")
                .output("energy", TypeTag::Real, "the energy")
                .build(),
        );
        let lines = emit_definition(&algo, &CodegenConfig::default())
            .unwrap()
            .lines;
        assert!(lines.contains(&"\t_energy = AlgorithmFactory::create(\"Energy\");".to_string()));
        assert!(lines.contains(&"\t_energy->configure();".to_string()));
        assert!(lines.contains(&"\tfloat output_energy;".to_string()));
    }

    #[test]
    fn test_reconfigure_by_recreate() {
        let algo = normalized(
            AlgorithmDescriptor::builder("PitchMelodia")
                .input("signal", TypeTag::VectorReal, "the input signal")
                .output("pitch", TypeTag::VectorReal, "the estimated pitch values [Hz]")
                .output("pitchConfidence", TypeTag::VectorReal, "confidence")
                .param("frameSize", TypeTag::Integer, "2048", "the frame size")
                .param("hopSize", TypeTag::Integer, "128", "the hop size")
                .build(),
        );
        let lines = emit_definition(&algo, &CodegenConfig::default())
            .unwrap()
            .lines;

        let start = lines
            .iter()
            .position(|l| l.starts_with("void PitchMelodia::configure("))
            .unwrap();
        assert_eq!(lines[start + 1], "\tif (_pitchmelodia) delete _pitchmelodia;");
        assert_eq!(
            lines[start + 2],
            "\t_pitchmelodia = AlgorithmFactory::create(\"PitchMelodia\", \"frameSize\", frameSize, \"hopSize\", hopSize);"
        );
        assert_eq!(lines[start + 3], "}");
        assert!(!lines.iter().any(|l| l.contains("_pitchmelodia->configure(")));
    }

    #[test]
    fn test_recreate_set_comes_from_config() {
        let config = CodegenConfig::default().with_reconfigure_by_recreate(["Windowing"]);
        let lines = emit_definition(&windowing(), &config).unwrap().lines;
        assert!(!lines.iter().any(|l| l.contains("->configure(")));

        let lines = emit_definition(&windowing(), &CodegenConfig::default())
            .unwrap()
            .lines;
        assert!(lines.iter().any(|l| l.contains("_windowing->configure(")));
    }

    #[test]
    fn test_recreate_without_parameters_configures_in_place() {
        let algo = normalized(
            AlgorithmDescriptor::builder("MultiPitchMelodia")
                .input("signal", TypeTag::VectorReal, "")
                .output("pitch", TypeTag::VectorVectorReal, "")
                .build(),
        );
        let lines = emit_definition(&algo, &CodegenConfig::default())
            .unwrap()
            .lines;
        assert!(lines.contains(&"\t_multipitchmelodia->configure();".to_string()));
        assert!(lines.contains(&"\tstd::vector<std::vector<float> > output_pitch;".to_string()));
    }

    #[test]
    fn test_multiple_outputs_use_bare_keys() {
        let algo = normalized(
            AlgorithmDescriptor::builder("PitchYin")
                .input("signal", TypeTag::VectorReal, "")
                .output("pitch", TypeTag::Real, "")
                .output("pitchConfidence", TypeTag::Real, "")
                .build(),
        );
        let lines = emit_definition(&algo, &CodegenConfig::default())
            .unwrap()
            .lines;
        let sets: Vec<_> = lines
            .iter()
            .filter(|l| l.starts_with("\toutputPitchYin.set("))
            .cloned()
            .collect();
        assert_eq!(
            sets,
            vec![
                "\toutputPitchYin.set(\"pitch\", output_pitch);",
                "\toutputPitchYin.set(\"pitchConfidence\", output_pitchConfidence);",
            ]
        );
    }

    #[test]
    fn test_no_outputs_is_missing_binding() {
        let algo = normalized(
            AlgorithmDescriptor::builder("Sink")
                .input("signal", TypeTag::VectorReal, "")
                .build(),
        );
        let err = emit_definition(&algo, &CodegenConfig::default()).unwrap_err();
        assert!(matches!(err, CodegenError::MissingOutputBinding { ref algorithm } if algorithm == "Sink"));
    }

    #[test]
    fn test_unsupported_output_type_fails() {
        let algo = normalized(
            AlgorithmDescriptor::builder("FFT")
                .input("frame", TypeTag::VectorReal, "")
                .output("fft", TypeTag::VectorComplex, "")
                .build(),
        );
        let err = emit_definition(&algo, &CodegenConfig::default()).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedType { ref field, .. } if field == "fft"));
    }
}
