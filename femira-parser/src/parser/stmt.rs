use super::*;

impl Parser {
    /// Parses expressions until `close` is the current token, eating an optional separator
    /// after each one. Neither delimiter is consumed.
    fn parse_sequence(
        &mut self,
        close: TokenKind,
        separators: &[TokenKind],
    ) -> ParseResult<Vec<AstNode>> {
        let mut items = Vec::new();
        while !self.is_token(&[close], self.cursor) {
            items.push(self.parse_expression(false)?);
            self.match_token(separators);
        }
        Ok(items)
    }

    /// Parses `{ statement [;] ... }`.
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect(&[TokenKind::Begin])?;
        let statements = self.parse_sequence(TokenKind::End, &[TokenKind::Semicolon])?;
        self.expect(&[TokenKind::End])?;

        Ok(Block { statements })
    }

    /// Parses `if condition { ... } [else { ... }]`.
    pub(super) fn parse_if(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::If])?;

        let condition = self.parse_expression(false)?;
        let then_block = self.parse_block()?;
        let else_block = if self.match_token(&[TokenKind::Else]) {
            self.parse_block()?
        } else {
            Block::default()
        };

        Ok(AstNode::If {
            condition: Box::new(condition),
            then_block,
            else_block,
        })
    }

    pub(super) fn parse_while(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::While])?;

        let condition = self.parse_expression(false)?;
        let body = self.parse_block()?;

        Ok(AstNode::While {
            condition: Box::new(condition),
            body,
        })
    }

    /// Parses `fn name(param: type, ...) -> return_type { ... }`.
    pub(super) fn parse_function(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::Function])?;
        let name = self.parse_identifier()?;

        self.expect(&[TokenKind::LParen])?;
        let mut parameters = Vec::new();
        while !self.is_token(&[TokenKind::RParen], self.cursor) {
            parameters.push(self.parse_identifier()?);
            self.match_token(&[TokenKind::Comma]);
        }
        self.expect(&[TokenKind::RParen])?;

        self.expect(&[TokenKind::Arrow])?;
        let return_type = self.parse_expression(false)?;
        let body = self.parse_block()?;

        Ok(AstNode::Function {
            name,
            parameters,
            body,
            return_type: Box::new(return_type),
        })
    }

    /// Parses `type Name := type_expr`.
    pub(super) fn parse_typedef(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::Type])?;
        let name = self.parse_identifier()?;
        self.expect(&[TokenKind::Assign])?;
        let type_expr = self.parse_expression(false)?;

        Ok(AstNode::Typedef {
            name,
            type_expr: Box::new(type_expr),
        })
    }

    pub(super) fn parse_array(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::LSqParen])?;
        let elements = self.parse_sequence(TokenKind::RSqParen, &[TokenKind::Comma])?;
        self.expect(&[TokenKind::RSqParen])?;

        Ok(AstNode::Array(elements))
    }

    /// Fields may be separated by either `,` or `;`.
    pub(super) fn parse_object(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::Begin])?;
        let fields =
            self.parse_sequence(TokenKind::End, &[TokenKind::Comma, TokenKind::Semicolon])?;
        self.expect(&[TokenKind::End])?;

        Ok(AstNode::Object(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::make_tokens;
    use insta::assert_snapshot;

    fn program(source: &str) -> String {
        Parser::new(make_tokens(source).unwrap())
            .make_ast()
            .unwrap()
            .to_string()
    }

    fn error(source: &str) -> SyntaxError {
        Parser::new(make_tokens(source).unwrap())
            .make_ast()
            .unwrap_err()
    }

    #[test]
    fn test_if() {
        assert_snapshot!(
            program("if x > 1 { print x; } else { print 0 }"),
            @"(block (if (> x 1) (block (print x)) (block (print 0))))"
        );
        assert_snapshot!(program("if ok { }"), @"(block (if ok (block) (block)))");
    }

    #[test]
    fn test_while() {
        assert_snapshot!(
            program("while i < 10 { i := i + 1; print i }"),
            @"(block (while (< i 10) (block (:= i (+ i 1)) (print i))))"
        );
    }

    #[test]
    fn test_function() {
        assert_snapshot!(
            program("fn add(a: int, b: int) -> int { return a + b; }"),
            @"(block (fn add ((: a int) (: b int)) -> int (block (return (+ a b)))))"
        );
        assert_snapshot!(program("fn main() -> nil {}"), @"(block (fn main () -> nil (block)))");
    }

    #[test]
    fn test_array_and_object() {
        assert_snapshot!(program("[1, 2, [3]]"), @"(block (array 1 2 (array 3)))");
        assert_snapshot!(program("[]"), @"(block (array))");
        assert_snapshot!(
            program("{ x := 1, y := 2; z := 3 }"),
            @"(block (object (:= x 1) (:= y 2) (:= z 3)))"
        );
    }

    #[test]
    fn test_typedef() {
        assert_snapshot!(
            program("type Point := { x: int, y: int };"),
            @"(block (type Point (object (: x int) (: y int))))"
        );
    }

    #[test]
    fn test_statements_without_semicolons() {
        assert_snapshot!(program("print 1 print 2; "), @"(block (print 1) (print 2))");
    }

    #[test]
    fn test_unclosed_block() {
        assert_eq!(
            error("while x { print x"),
            SyntaxError::UnparsableExpression {
                found: "end of input".to_string(),
                position: 5,
                offset: None,
            }
        );
        assert_eq!(
            error("xs[1"),
            SyntaxError::UnexpectedToken {
                expected: "]".to_string(),
                found: "end of input".to_string(),
                position: 3,
                offset: None,
            }
        );
    }

    #[test]
    fn test_missing_arrow() {
        let err = error("fn f() { }");
        assert_eq!(err.position(), 4);
        assert_eq!(
            err.to_string(),
            "expected one of ->, found {, at position 4"
        );
    }
}
