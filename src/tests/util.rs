macro_rules! num {
    ($n:literal) => { crate::SyntaxNode::number($n) };
}

macro_rules! var {
    ($v:literal) => { crate::SyntaxNode::variable($v) };
}

macro_rules! path {
    ($($i:expr),* $(,)?) => { crate::PartPath::new(vec![ $($i),* ]) };
}

macro_rules! ascii {
    ($part:expr, $sel:expr $(,)?) => { {
        let mut renderer = crate::renderers::AsciiRenderer::default();
        <crate::renderers::AsciiRenderer as crate::render::Renderer>::draw_all(&mut renderer, &$part, $sel);
        renderer.line
    } };

    ($part:expr $(,)?) => { ascii!($part, None) };
}

macro_rules! visualizer {
    ($tree:expr $(,)?) => { {
        let mut v = crate::Visualizer::new();
        assert_eq!(v.set_syntax_tree($tree).unwrap(), true);
        v
    } };
}

/// `($b + SQRT(SQR($b) - 4 * $a)) / (2 * $a)`, as the formula parser produces it.
///
/// ```text
/// path           part
/// [0]            ( $b + SQRT(...) )
/// [0, 3]         SQRT ( ... )
/// [0, 3, 2]      SQR($b) - 4 * $a
/// [0, 3, 2, 0]   SQR ( $b )
/// [0, 3, 2, 2]   4 * $a
/// [2]            ( 2 * $a )
/// ```
pub fn quadratic_formula() -> crate::SyntaxNode {
    use crate::SyntaxNode;

    SyntaxNode::divide(
        SyntaxNode::grouping(SyntaxNode::add(
            var!("$b"),
            SyntaxNode::function_call("SQRT", vec![
                SyntaxNode::subtract(
                    SyntaxNode::function_call("SQR", vec![var!("$b")]),
                    SyntaxNode::multiply(num!(4), var!("$a")),
                ),
            ]),
        )),
        SyntaxNode::grouping(SyntaxNode::multiply(num!(2), var!("$a"))),
    )
}
