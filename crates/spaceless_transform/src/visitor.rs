use spaceless_core::SpacelessOptions;
use swc_core::ecma::{
    ast::{Expr, Module, Program},
    visit::{VisitMut, VisitMutWith},
};

use crate::{transform_tagged_tpl, TaggedTplOutcome};

/// Transforms a whole program, returns the number of replaced templates
pub fn transform_program(program: &mut Program, options: &SpacelessOptions) -> usize {
    let mut visitor = SpacelessVisitor::new(options);
    program.visit_mut_with(&mut visitor);
    visitor.replaced()
}

/// Same as [`transform_program`] for an ES module
pub fn transform_module(module: &mut Module, options: &SpacelessOptions) -> usize {
    let mut visitor = SpacelessVisitor::new(options);
    module.visit_mut_with(&mut visitor);
    visitor.replaced()
}

/// Replaces `spaceless` and `inline` tagged templates with plain template literals
pub struct SpacelessVisitor<'o> {
    options: &'o SpacelessOptions,
    replaced: usize,
}

impl<'o> SpacelessVisitor<'o> {
    pub fn new(options: &'o SpacelessOptions) -> Self {
        SpacelessVisitor {
            options,
            replaced: 0,
        }
    }

    /// How many tagged templates were replaced so far
    pub fn replaced(&self) -> usize {
        self.replaced
    }
}

impl<'o> VisitMut for SpacelessVisitor<'o> {
    fn visit_mut_expr(&mut self, n: &mut Expr) {
        // Inner templates in `${}` go first
        n.visit_mut_children_with(self);

        let Expr::TaggedTpl(tagged) = n else {
            return;
        };

        if let TaggedTplOutcome::Replace(tpl) = transform_tagged_tpl(tagged, self.options) {
            *n = Expr::Tpl(*tpl);
            self.replaced += 1;
        }
    }
}
