use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    LetStatement { name: String, value: Expression },
    ReturnStatement(Option<Expression>),
    ExpressionStatement(Expression),
    BlockStatement(Vec<Statement>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral {
        value: i64,
    },
    Boolean {
        value: bool,
    },
    PrefixExpression {
        operator: PrefixOperator,
        right: Box<Expression>,
    },
    InfixExpression {
        left: Box<Expression>,
        operator: InfixOperator,
        right: Box<Expression>,
    },
    IfExpression {
        condition: Box<Expression>,
        consequence: Box<Statement>,
        alternative: Option<Box<Statement>>,
    },
    FunctionLiteral {
        parameters: Vec<String>,
        body: Box<Statement>,
    },
    CallExpression {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfixOperator {
    PLUS,
    MINUS,
    ASTERISK,
    SLASH,
    LT,
    GT,
    EQ,
    NEQ,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrefixOperator {
    MINUS,
    BANG,
}

impl Program {
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, |stmt| stmt.token_literal())
    }
}

impl Statement {
    /// Literal of the token this statement started at.
    pub fn token_literal(&self) -> String {
        use Statement::*;
        match self {
            LetStatement { .. } => "let".to_string(),
            ReturnStatement(..) => "return".to_string(),
            ExpressionStatement(exp) => exp.token_literal(),
            BlockStatement(..) => "{".to_string(),
        }
    }
}

impl Expression {
    pub fn token_literal(&self) -> String {
        use Expression::*;
        match self {
            Identifier(name) => name.clone(),
            IntegerLiteral { value } => value.to_string(),
            Boolean { value } => value.to_string(),
            PrefixExpression { operator, .. } => operator.to_string(),
            InfixExpression { operator, .. } => operator.to_string(),
            IfExpression { .. } => "if".to_string(),
            FunctionLiteral { .. } => "fn".to_string(),
            CallExpression { .. } => "(".to_string(),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Statement::*;
        match self {
            LetStatement { name, value } => {
                write!(f, "let {} = {};", name, value)
            }
            ReturnStatement(None) => {
                write!(f, "return;")
            }
            ReturnStatement(Some(value)) => {
                write!(f, "return {};", value)
            }
            ExpressionStatement(exp) => {
                write!(f, "{}", exp)
            }
            BlockStatement(statements) => {
                write!(f, "{{")?;
                for stmt in statements {
                    write!(f, " {}", stmt)?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Expression::*;
        match self {
            Identifier(name) => {
                write!(f, "{}", name)
            }
            IntegerLiteral { value } => {
                write!(f, "{}", value)
            }
            Boolean { value } => {
                write!(f, "{}", value)
            }
            PrefixExpression { operator, right } => {
                write!(f, "({}{})", operator, right)
            }
            InfixExpression {
                left,
                operator,
                right,
            } => {
                write!(f, "({} {} {})", left, operator, right)
            }
            IfExpression {
                condition,
                consequence,
                alternative,
            } => {
                // the condition is re-wrapped in parens so the text re-parses
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {}", parameters.join(", "), body)
            }
            CallExpression {
                function,
                arguments,
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(|arg| arg.to_string()).collect();
                write!(f, "{}({})", function, arguments.join(", "))
            }
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use PrefixOperator::*;
        match self {
            MINUS => {
                write!(f, "-")
            }
            BANG => {
                write!(f, "!")
            }
        }
    }
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use InfixOperator::*;
        match self {
            PLUS => {
                write!(f, "+")
            }
            MINUS => {
                write!(f, "-")
            }
            ASTERISK => {
                write!(f, "*")
            }
            SLASH => {
                write!(f, "/")
            }
            LT => {
                write!(f, "<")
            }
            GT => {
                write!(f, ">")
            }
            EQ => {
                write!(f, "==")
            }
            NEQ => {
                write!(f, "!=")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Expression, Program, Statement};

    #[test]
    fn test_string() {
        let program = Program {
            statements: vec![Statement::LetStatement {
                name: "myVar".to_string(),
                value: Expression::Identifier("anotherVar".to_string()),
            }],
        };
        assert_eq!("let myVar = anotherVar;", format!("{}", program).trim_end());
    }

    #[test]
    fn test_token_literal() {
        let program = Program {
            statements: vec![Statement::LetStatement {
                name: "x".to_string(),
                value: Expression::IntegerLiteral { value: 5 },
            }],
        };
        assert_eq!("let", program.token_literal());
        assert_eq!(
            "5",
            Expression::IntegerLiteral { value: 5 }.token_literal()
        );
        let empty = Program { statements: vec![] };
        assert_eq!("", empty.token_literal());
    }
}
