//! Node kinds and operator enums of the syntax tree.

use std::fmt;

use crate::{Modifiers, Name};

/// Kind of a syntax node, with the data that is not itself a child node.
///
/// Child layouts are fixed per kind; optional children are flagged on the
/// variant (`If::has_else`, `For::has_condition`, ...) or distinguished by
/// their own kind, so positional access never has to guess.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    // ─── Compilation unit ──────────────────────────────────────────
    /// Children: `PackageDecl?`, `ImportDecl*`, type declarations.
    CompilationUnit,
    PackageDecl {
        name: Name,
    },
    ImportDecl {
        path: Name,
        is_static: bool,
        is_wildcard: bool,
    },

    // ─── Declarations ──────────────────────────────────────────────
    /// Children: `Modifiers`, `TypeParameters?`, `Extends?`, `Implements?`, `ClassBody`.
    ClassDecl {
        name: Name,
    },
    /// Children: `Modifiers`, `TypeParameters?`, `Extends?`, `ClassBody`.
    InterfaceDecl {
        name: Name,
    },
    /// Children: `Modifiers`, `Implements?`, `EnumConstant*`, `ClassBody`.
    EnumDecl {
        name: Name,
    },
    /// Children: `Modifiers`, `Arguments?`, `ClassBody?`.
    EnumConstant {
        name: Name,
    },
    /// Children: `Annotation*`.
    Modifiers(Modifiers),
    /// Children: element values (expressions, `ArrayInit`, `Annotation`) or `AnnotationPair*`.
    Annotation {
        name: Name,
    },
    /// Children: the element value.
    AnnotationPair {
        name: Name,
    },
    /// Children: `TypeParam+`.
    TypeParameters,
    /// Children: bound `TypeRef*`.
    TypeParam {
        name: Name,
    },
    /// Children: `TypeRef+`.
    Extends,
    /// Children: `TypeRef+`.
    Implements,
    /// Children: member declarations.
    ClassBody,
    /// Children: `Modifiers`, `TypeRef`, `VarDeclarator+`.
    FieldDecl,
    /// Children: initializer expression (or `ArrayInit`) if present.
    VarDeclarator {
        name: Name,
        dims: u8,
    },
    /// Children: `Modifiers`, `TypeParameters?`, `TypeRef` (return), `Params`,
    /// `Throws?`, `Block?` (absent for abstract/interface methods).
    MethodDecl {
        name: Name,
    },
    /// Children: `Modifiers`, `TypeParameters?`, `Params`, `Throws?`, `Block`.
    ConstructorDecl {
        name: Name,
    },
    /// Children: `Param*`.
    Params,
    /// Children: `Modifiers`, `TypeRef`.
    Param {
        name: Name,
        varargs: bool,
    },
    /// Children: `TypeRef+`.
    Throws,
    /// Children: `Block`.
    Initializer {
        is_static: bool,
    },

    // ─── Types ─────────────────────────────────────────────────────
    /// Qualified or primitive type name with array dimensions.
    /// Children: generic type arguments (`TypeRef` / `Wildcard`) in order.
    TypeRef {
        name: Name,
        dims: u8,
    },
    /// Children: the bound `TypeRef` unless `bound` is `Unbounded`.
    Wildcard {
        bound: WildcardBound,
    },

    // ─── Statements ────────────────────────────────────────────────
    /// Children: statements.
    Block,
    /// Children: `Modifiers`, `TypeRef`, `VarDeclarator+`.
    LocalVarDecl,
    /// Children: expression.
    ExprStmt,
    /// Children: condition, then-statement, else-statement if `has_else`.
    If {
        has_else: bool,
    },
    /// Children: condition, body.
    While,
    /// Children: body, condition.
    DoWhile,
    /// Children: `ForInit`, condition if `has_condition`, `ForUpdate`, body.
    For {
        has_condition: bool,
    },
    /// Children: a `LocalVarDecl` or expressions.
    ForInit,
    /// Children: expressions.
    ForUpdate,
    /// Children: `Modifiers`, `TypeRef`, `VarDeclarator`, iterable expression, body.
    ForEach,
    /// Children: value if present.
    Return,
    Break {
        label: Option<Name>,
    },
    Continue {
        label: Option<Name>,
    },
    /// Children: expression.
    Throw,
    /// Children: `ResourceSpec?`, `Block`, `CatchClause*`, `Finally?`, and an
    /// `Error` node when neither catch nor finally is present.
    Try,
    /// Children: `Resource*`.
    ResourceSpec,
    /// Children: `Modifiers`, `TypeRef`, initializer.
    Resource {
        name: Name,
    },
    /// Children: exception `TypeRef+` in source order, then `Block`.
    CatchClause {
        param: Name,
        is_final: bool,
    },
    /// Children: `Block`.
    Finally,
    /// Children: subject expression, `SwitchGroup*`.
    Switch,
    /// Children: `CaseLabel+`, then statements.
    SwitchGroup,
    /// Children: the case expression unless `is_default`.
    CaseLabel {
        is_default: bool,
    },
    /// Children: lock expression, `Block`.
    Synchronized,
    /// Children: condition, message if `has_message`.
    Assert {
        has_message: bool,
    },
    /// Children: statement.
    Labeled {
        label: Name,
    },
    Empty,

    // ─── Expressions ───────────────────────────────────────────────
    Literal(LiteralKind),
    /// Simple identifier reference.
    Name {
        ident: Name,
    },
    /// Children: target expression.
    FieldAccess {
        name: Name,
    },
    /// Children: receiver if `has_receiver`, then `Arguments`.
    MethodCall {
        name: Name,
        has_receiver: bool,
    },
    /// Children: argument expressions.
    Arguments,
    /// `this(...)` / `super(...)`. Children: `Arguments`.
    ExplicitCtorCall {
        is_super: bool,
    },
    /// Children: `TypeRef`, `Arguments`, `ClassBody?` (anonymous class).
    NewObject,
    /// Children: element `TypeRef` (with total `dims`), dimension expressions,
    /// `ArrayInit?`.
    NewArray,
    /// Children: element expressions (nested `ArrayInit` for sub-arrays).
    ArrayInit,
    /// Children: array, index.
    ArrayAccess,
    /// Children: operand.
    Unary(UnaryOp),
    /// Children: operand.
    Postfix(PostfixOp),
    /// Children: left, right.
    Binary(BinaryOp),
    /// Children: target, value.
    Assign(AssignOp),
    /// Children: condition, then, else.
    Conditional,
    /// Children: `TypeRef`, operand.
    Cast,
    /// Children: operand, `TypeRef`.
    InstanceOf,
    This,
    Super,
    /// `Type.class`. Children: `TypeRef`.
    ClassLiteral,
    /// Children: inner expression.
    Paren,

    /// Placeholder for input that could not be parsed. Covers the skipped span.
    Error,
}

impl NodeKind {
    /// The identifier carried by declaration and reference nodes.
    pub fn name(self) -> Option<Name> {
        match self {
            NodeKind::PackageDecl { name }
            | NodeKind::ClassDecl { name }
            | NodeKind::InterfaceDecl { name }
            | NodeKind::EnumDecl { name }
            | NodeKind::EnumConstant { name }
            | NodeKind::Annotation { name }
            | NodeKind::AnnotationPair { name }
            | NodeKind::TypeParam { name }
            | NodeKind::VarDeclarator { name, .. }
            | NodeKind::MethodDecl { name }
            | NodeKind::ConstructorDecl { name }
            | NodeKind::Param { name, .. }
            | NodeKind::TypeRef { name, .. }
            | NodeKind::Resource { name }
            | NodeKind::FieldAccess { name }
            | NodeKind::MethodCall { name, .. } => Some(name),
            NodeKind::ImportDecl { path, .. } => Some(path),
            NodeKind::CatchClause { param, .. } => Some(param),
            NodeKind::Labeled { label } => Some(label),
            NodeKind::Break { label } | NodeKind::Continue { label } => label,
            NodeKind::Name { ident } => Some(ident),
            _ => None,
        }
    }

    /// Short kind name without payload, for tree dumps.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::PackageDecl { .. } => "PackageDecl",
            NodeKind::ImportDecl { .. } => "ImportDecl",
            NodeKind::ClassDecl { .. } => "ClassDecl",
            NodeKind::InterfaceDecl { .. } => "InterfaceDecl",
            NodeKind::EnumDecl { .. } => "EnumDecl",
            NodeKind::EnumConstant { .. } => "EnumConstant",
            NodeKind::Modifiers(_) => "Modifiers",
            NodeKind::Annotation { .. } => "Annotation",
            NodeKind::AnnotationPair { .. } => "AnnotationPair",
            NodeKind::TypeParameters => "TypeParameters",
            NodeKind::TypeParam { .. } => "TypeParam",
            NodeKind::Extends => "Extends",
            NodeKind::Implements => "Implements",
            NodeKind::ClassBody => "ClassBody",
            NodeKind::FieldDecl => "FieldDecl",
            NodeKind::VarDeclarator { .. } => "VarDeclarator",
            NodeKind::MethodDecl { .. } => "MethodDecl",
            NodeKind::ConstructorDecl { .. } => "ConstructorDecl",
            NodeKind::Params => "Params",
            NodeKind::Param { .. } => "Param",
            NodeKind::Throws => "Throws",
            NodeKind::Initializer { .. } => "Initializer",
            NodeKind::TypeRef { .. } => "TypeRef",
            NodeKind::Wildcard { .. } => "Wildcard",
            NodeKind::Block => "Block",
            NodeKind::LocalVarDecl => "LocalVarDecl",
            NodeKind::ExprStmt => "ExprStmt",
            NodeKind::If { .. } => "If",
            NodeKind::While => "While",
            NodeKind::DoWhile => "DoWhile",
            NodeKind::For { .. } => "For",
            NodeKind::ForInit => "ForInit",
            NodeKind::ForUpdate => "ForUpdate",
            NodeKind::ForEach => "ForEach",
            NodeKind::Return => "Return",
            NodeKind::Break { .. } => "Break",
            NodeKind::Continue { .. } => "Continue",
            NodeKind::Throw => "Throw",
            NodeKind::Try => "Try",
            NodeKind::ResourceSpec => "ResourceSpec",
            NodeKind::Resource { .. } => "Resource",
            NodeKind::CatchClause { .. } => "CatchClause",
            NodeKind::Finally => "Finally",
            NodeKind::Switch => "Switch",
            NodeKind::SwitchGroup => "SwitchGroup",
            NodeKind::CaseLabel { .. } => "CaseLabel",
            NodeKind::Synchronized => "Synchronized",
            NodeKind::Assert { .. } => "Assert",
            NodeKind::Labeled { .. } => "Labeled",
            NodeKind::Empty => "Empty",
            NodeKind::Literal(_) => "Literal",
            NodeKind::Name { .. } => "Name",
            NodeKind::FieldAccess { .. } => "FieldAccess",
            NodeKind::MethodCall { .. } => "MethodCall",
            NodeKind::Arguments => "Arguments",
            NodeKind::ExplicitCtorCall { .. } => "ExplicitCtorCall",
            NodeKind::NewObject => "NewObject",
            NodeKind::NewArray => "NewArray",
            NodeKind::ArrayInit => "ArrayInit",
            NodeKind::ArrayAccess => "ArrayAccess",
            NodeKind::Unary(_) => "Unary",
            NodeKind::Postfix(_) => "Postfix",
            NodeKind::Binary(_) => "Binary",
            NodeKind::Assign(_) => "Assign",
            NodeKind::Conditional => "Conditional",
            NodeKind::Cast => "Cast",
            NodeKind::InstanceOf => "InstanceOf",
            NodeKind::This => "This",
            NodeKind::Super => "Super",
            NodeKind::ClassLiteral => "ClassLiteral",
            NodeKind::Paren => "Paren",
            NodeKind::Error => "Error",
        }
    }

    /// True for the three type declaration kinds.
    pub fn is_type_decl(self) -> bool {
        matches!(
            self,
            NodeKind::ClassDecl { .. } | NodeKind::InterfaceDecl { .. } | NodeKind::EnumDecl { .. }
        )
    }
}

/// Literal token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Int,
    Float,
    Char,
    String,
    True,
    False,
    Null,
}

/// Bound of a `?` type argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WildcardBound {
    Unbounded,
    Extends,
    Super,
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    PreInc,
    PreDec,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::PreInc => "++",
            UnaryOp::PreDec => "--",
        }
    }
}

/// Postfix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub fn symbol(self) -> &'static str {
        match self {
            PostfixOp::Inc => "++",
            PostfixOp::Dec => "--",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Binding power; higher binds tighter. All binary operators are
    /// left-associative. `instanceof` sits at the relational level.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::BitOr => 3,
            BinaryOp::BitXor => 4,
            BinaryOp::BitAnd => 5,
            BinaryOp::Eq | BinaryOp::NotEq => 6,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => 7,
            BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => 8,
            BinaryOp::Add | BinaryOp::Sub => 9,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 10,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Assignment operators, plain and compound.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
}

impl AssignOp {
    pub fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UShr => ">>>=",
        }
    }
}
