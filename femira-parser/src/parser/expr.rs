use super::*;

impl Parser {
    /* Expressions */
    /// Parses any expression, including trailing calls, indexations and binary operators.
    ///
    /// When `ignore_binary_operators` is `true`, parsing stops in front of a binary operator.
    /// The precedence ladder uses this to parse its operands.
    pub fn parse_expression(&mut self, ignore_binary_operators: bool) -> ParseResult<AstNode> {
        let start = self.checkpoint();

        if ignore_binary_operators {
            if let Some(operand) = self.take_reparsed_operand(start) {
                return Ok(operand);
            }
        }

        let kind = self.current_kind();
        let expression = if kind == TokenKind::Function {
            self.parse_function()?
        } else if LITERAL_KINDS.contains(&kind) {
            self.parse_literal()?
        } else if kind == TokenKind::Identifier {
            AstNode::Identifier(self.parse_identifier()?)
        } else if kind == TokenKind::LParen {
            self.parse_parenthesized()?
        } else if UNARY_KINDS.contains(&kind) {
            self.parse_unary()?
        } else if kind == TokenKind::LSqParen {
            self.parse_array()?
        } else if kind == TokenKind::Begin {
            self.parse_object()?
        } else if kind == TokenKind::While {
            self.parse_while()?
        } else if kind == TokenKind::Type {
            self.parse_typedef()?
        } else if kind == TokenKind::If {
            self.parse_if()?
        } else {
            return Err(SyntaxError::UnparsableExpression {
                found: kind.name().to_string(),
                position: self.cursor,
                offset: self.current_offset(),
            });
        };

        self.subparse(expression, start, ignore_binary_operators)
    }

    /// Extends an already parsed expression with calls, indexations and binary operators.
    ///
    /// Binary operators are not folded onto `expression` directly. Instead the cursor is
    /// rewound to `start` and the whole expression is parsed again through [`Self::parse_binary`].
    /// The first operand of that pass is the expression already parsed here, so every
    /// primary expression is parsed once however deep parentheses nest.
    fn subparse(
        &mut self,
        mut expression: AstNode,
        start: Checkpoint,
        ignore_binary_operators: bool,
    ) -> ParseResult<AstNode> {
        let mut folded = false;

        loop {
            expression = if self.is_token(&[TokenKind::LParen], self.cursor) {
                self.parse_call(expression)?
            } else if self.is_token(&[TokenKind::LSqParen], self.cursor) {
                self.parse_indexation(expression)?
            } else if !ignore_binary_operators && self.is_token(BINARY_KINDS, self.cursor) {
                // Once folded, `expression` is no longer what `parse_expression(true)`
                // yields at `start`, so it cannot be reused.
                if !folded {
                    self.reparsed_operand = Some((start, expression, self.checkpoint()));
                }
                folded = true;
                self.rewind(start);
                self.parse_binary()?
            } else {
                return Ok(expression);
            };
        }
    }

    fn take_reparsed_operand(&mut self, start: Checkpoint) -> Option<AstNode> {
        match self.reparsed_operand.take() {
            Some((from, operand, end)) if from == start => {
                self.cursor = end.0;
                Some(operand)
            }
            other => {
                self.reparsed_operand = other;
                None
            }
        }
    }

    /* Expressions.Binary */
    /// Folds `operand` results separated by any of `operators` into a left-leaning chain.
    fn parse_left_associative(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> ParseResult<AstNode>,
    ) -> ParseResult<AstNode> {
        let mut left = operand(self)?;

        while self.match_token(operators) {
            let operator = self.previous();
            let right = operand(self)?;

            left = AstNode::BinaryOperation {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Lowest precedence: `and`, `or`.
    fn parse_binary(&mut self) -> ParseResult<AstNode> {
        self.parse_left_associative(&[TokenKind::And, TokenKind::Or], Self::headterm)
    }

    /// Assignment, equality and ordering.
    fn headterm(&mut self) -> ParseResult<AstNode> {
        self.parse_left_associative(
            &[
                TokenKind::Assign,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Bigger,
                TokenKind::Smaller,
                TokenKind::BiggerOrEq,
                TokenKind::SmallerOrEq,
            ],
            Self::term,
        )
    }

    /// Additive.
    fn term(&mut self) -> ParseResult<AstNode> {
        self.parse_left_associative(&[TokenKind::Plus, TokenKind::Minus], Self::subterm)
    }

    /// Multiplicative. Operands are parsed without binary operators.
    fn subterm(&mut self) -> ParseResult<AstNode> {
        self.parse_left_associative(&[TokenKind::Asterisk, TokenKind::Slash], |parser| {
            parser.parse_expression(true)
        })
    }

    /* Expressions.Literals */
    fn parse_literal(&mut self) -> ParseResult<AstNode> {
        Ok(AstNode::Literal(self.expect(LITERAL_KINDS)?))
    }

    /* Expressions.Identifier */
    /// Parses an identifier with an optional type annotation (e.g. `x: int`).
    pub(super) fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.expect(&[TokenKind::Identifier])?;

        let type_annotation = if self.match_token(&[TokenKind::Annotate]) {
            Some(Box::new(self.parse_expression(false)?))
        } else {
            None
        };

        Ok(Identifier {
            token,
            type_annotation,
        })
    }

    fn parse_parenthesized(&mut self) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::LParen])?;
        let inner = self.parse_expression(false)?;
        self.expect(&[TokenKind::RParen])?;

        Ok(AstNode::Parenthesized(Box::new(inner)))
    }

    /// Parses `return`, `print` or `wait` followed by its operand.
    fn parse_unary(&mut self) -> ParseResult<AstNode> {
        let operator = self.expect(UNARY_KINDS)?;
        let operand = self.parse_expression(false)?;

        Ok(AstNode::UnaryOperation {
            operator,
            operand: Box::new(operand),
        })
    }

    /* Expressions.Postfix */
    fn parse_call(&mut self, callee: AstNode) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::LParen])?;

        let mut arguments = Vec::new();
        while !self.is_token(&[TokenKind::RParen], self.cursor) {
            arguments.push(self.parse_expression(false)?);
            self.match_token(&[TokenKind::Comma]);
        }

        self.expect(&[TokenKind::RParen])?;

        Ok(AstNode::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn parse_indexation(&mut self, target: AstNode) -> ParseResult<AstNode> {
        self.expect(&[TokenKind::LSqParen])?;
        let index = self.parse_expression(false)?;
        self.expect(&[TokenKind::RSqParen])?;

        Ok(AstNode::Indexation {
            target: Box::new(target),
            index: Box::new(index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::make_tokens;
    use insta::assert_snapshot;

    /// Parses `source` as a single expression and renders it.
    fn expr(source: &str) -> String {
        let mut parser = Parser::new(make_tokens(source).unwrap());
        let ast = parser.parse_expression(false).unwrap();
        assert!(parser.at_end(), "trailing tokens in {:?}", source);
        ast.to_string()
    }

    #[test]
    fn test_literal() {
        assert_snapshot!(expr("true"), @"true");
        assert_snapshot!(expr("nil"), @"nil");
        assert_snapshot!(expr("1"), @"1");
        assert_snapshot!(expr("2.5"), @"2.5");
        assert_snapshot!(expr(r#""text""#), @r#""text""#);
    }

    #[test]
    fn test_binary_expr() {
        assert_snapshot!(expr("1 + 1"), @"(+ 1 1)");
        assert_snapshot!(expr("1 ?= 2 - 1"), @"(?= 1 (- 2 1))");
        assert_snapshot!(expr("2 * 2 * 2"), @"(* (* 2 2) 2)");
        assert_snapshot!(expr("1 + 2 + 3"), @"(+ (+ 1 2) 3)");
        assert_snapshot!(expr("a := b := c"), @"(:= (:= a b) c)");
    }

    #[test]
    fn test_precedence() {
        assert_snapshot!(expr("1 + 2 * 3"), @"(+ 1 (* 2 3))");
        assert_snapshot!(expr("1 * 2 + 3"), @"(+ (* 1 2) 3)");
        assert_snapshot!(expr("1 - 6 / 3 < 4"), @"(< (- 1 (/ 6 3)) 4)");
        assert_snapshot!(expr("a > 1 and b <= 2 or c"), @"(or (and (> a 1) (<= b 2)) c)");
        assert_snapshot!(expr("x := 1 + 2"), @"(:= x (+ 1 2))");
        assert_snapshot!(expr("(1 + 2) * 3"), @"(* (group (+ 1 2)) 3)");
    }

    #[test]
    fn test_identifier() {
        assert_snapshot!(expr("foo"), @"foo");
        assert_snapshot!(expr("x: int"), @"(: x int)");
        assert_snapshot!(expr("x: int := 5"), @"(: x (:= int 5))");
        assert_snapshot!(expr("a: int + 1"), @"(: a (+ int 1))");
        assert_snapshot!(expr("xs: list[int]"), @"(: xs (index list int))");
    }

    #[test]
    fn test_unary() {
        assert_snapshot!(expr("print 1 + 2"), @"(print (+ 1 2))");
        assert_snapshot!(expr("wait 0.5"), @"(wait 0.5)");
        assert_snapshot!(expr("return f(1)"), @"(return (call f 1))");
    }

    #[test]
    fn test_call_and_indexation() {
        assert_snapshot!(expr("foo()"), @"(call foo)");
        assert_snapshot!(expr("foo(1, bar)"), @"(call foo 1 bar)");
        assert_snapshot!(expr("foo(1, bar, baz())"), @"(call foo 1 bar (call baz))");
        assert_snapshot!(expr("foo(1)(2)"), @"(call (call foo 1) 2)");
        assert_snapshot!(expr("xs[0][i + 1]"), @"(index (index xs 0) (+ i 1))");
        assert_snapshot!(expr("f(1) + xs[2] * 3"), @"(+ (call f 1) (* (index xs 2) 3))");
    }

    #[test]
    fn test_left_nested_parentheses() {
        let depth = 64;
        let source = format!("{}1{}", "(".repeat(depth), " + 1)".repeat(depth));
        let expected = format!(
            "{}1{}",
            "(group (+ ".repeat(depth),
            " 1))".repeat(depth)
        );
        assert_eq!(expr(&source), expected);

        let source = format!("{}1{} * 2", "(".repeat(depth), " - 1)".repeat(depth));
        let mut parser = Parser::new(make_tokens(&source).unwrap());
        let ast = parser.parse_expression(false).unwrap();
        assert!(parser.at_end());
        assert!(ast.to_string().starts_with("(* (group (- (group (- "));
        assert!(parser.reparsed_operand.is_none());
    }

    #[test]
    fn test_binary_operator_inside_arguments() {
        assert_snapshot!(expr("max(1 + 2, 3 * 4) - 1"), @"(- (call max (+ 1 2) (* 3 4)) 1)");
    }
}
