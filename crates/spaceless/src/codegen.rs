use swc_core::{
    common::{sync::Lrc, SourceMap},
    ecma::ast::Module,
};
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

/// Prints a module back to code
pub fn stringify(module: &Module, minify: bool) -> std::io::Result<String> {
    let cm: Lrc<SourceMap> = Default::default();
    let mut buff: Vec<u8> = Vec::with_capacity(256);
    let writer: JsWriter<&mut Vec<u8>> = JsWriter::new(cm.clone(), "\n", &mut buff, None);

    let mut emitter_cfg = swc_ecma_codegen::Config::default();
    emitter_cfg.minify = minify;

    let mut emitter = Emitter {
        cfg: emitter_cfg,
        comments: None,
        wr: writer,
        cm,
    };

    module.emit_with(&mut emitter)?;

    Ok(String::from_utf8_lossy(&buff).into_owned())
}
