//! Binding surface inspection.
//!
//! Parses Rust source for `#[ffi]` functions and interfaces and describes
//! each one the way the host sees it: Kotlin declaration and JNI symbol.
//! Items whose shape cannot cross the boundary are rejected with an error
//! naming the culprit.

use anyhow::{bail, Context, Result};
use syn::{
    self, Attribute, FnArg, Item, ItemFn, ItemTrait, Pat, ReturnType, Signature, TraitItem, Type,
    TypeParamBound,
};

use crate::config::BindingsConfig;
use crate::ffi::{EXPORTS_SOURCE, INTERFACES_SOURCE, JNI_CLASS, JNI_PACKAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FfiType {
    Void,
    Int,
    Long,
    Bool,
    String,
    /// An #[ffi] trait the host implements, passed in as `&mut dyn Name`.
    Interface(String),
}

impl FfiType {
    /// Parse a value type from syn::Type
    pub fn from_syn_type(ty: &Type) -> Result<Self> {
        match ty {
            Type::Path(type_path) => {
                let Some(last_segment) = type_path.path.segments.last() else {
                    bail!("Empty type path");
                };
                let type_name = last_segment.ident.to_string();

                match type_name.as_str() {
                    "i32" => Ok(FfiType::Int),
                    "i64" => Ok(FfiType::Long),
                    "bool" => Ok(FfiType::Bool),
                    "String" => Ok(FfiType::String),
                    _ => bail!(
                        "Unsupported type: '{}'. The binding boundary carries: i32, i64, bool, String",
                        type_name
                    ),
                }
            }
            Type::Tuple(tuple) => {
                if tuple.elems.is_empty() {
                    Ok(FfiType::Void)
                } else {
                    bail!("Tuple types not supported (except unit type ())")
                }
            }
            Type::Reference(_) => {
                bail!("References cannot cross the binding boundary; pass owned values or a handle")
            }
            _ => bail!("Unsupported type structure"),
        }
    }

    /// Parse a parameter type. Parameters may also be `&mut dyn Interface`.
    pub fn from_param_type(ty: &Type) -> Result<Self> {
        if let Type::Reference(reference) = ty {
            if reference.mutability.is_some() {
                if let Type::TraitObject(object) = &*reference.elem {
                    let name = object.bounds.iter().find_map(|bound| match bound {
                        TypeParamBound::Trait(t) => {
                            t.path.segments.last().map(|s| s.ident.to_string())
                        }
                        _ => None,
                    });
                    if let Some(name) = name {
                        return Ok(FfiType::Interface(name));
                    }
                }
            }
            bail!("References cannot cross the binding boundary; pass owned values, a handle, or `&mut dyn Interface`")
        }

        Self::from_syn_type(ty)
    }

    pub fn to_jni_type(&self) -> &'static str {
        match self {
            FfiType::Void => "void",
            FfiType::Int => "jint",
            FfiType::Long => "jlong",
            FfiType::Bool => "jboolean",
            FfiType::String => "jstring",
            FfiType::Interface(_) => "jobject",
        }
    }

    pub fn to_kotlin_type(&self) -> &str {
        match self {
            FfiType::Void => "Unit",
            FfiType::Int => "Int",
            FfiType::Long => "Long",
            FfiType::Bool => "Boolean",
            FfiType::String => "String",
            FfiType::Interface(name) => name,
        }
    }

    pub fn to_rust_type(&self) -> String {
        match self {
            FfiType::Void => "()".to_string(),
            FfiType::Int => "i32".to_string(),
            FfiType::Long => "i64".to_string(),
            FfiType::Bool => "bool".to_string(),
            FfiType::String => "String".to_string(),
            FfiType::Interface(name) => format!("&mut dyn {}", name),
        }
    }
}

/// Return shape of an exported function: one value, optionally fallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiReturn {
    pub base_type: FfiType,
    pub is_result: bool,
}

impl FfiReturn {
    pub fn plain(base_type: FfiType) -> Self {
        FfiReturn {
            base_type,
            is_result: false,
        }
    }

    pub fn result(base_type: FfiType) -> Self {
        FfiReturn {
            base_type,
            is_result: true,
        }
    }

    /// Kotlin sees the same type either way; errors arrive as exceptions.
    pub fn to_kotlin_type(&self) -> &str {
        self.base_type.to_kotlin_type()
    }

    pub fn to_rust_type(&self) -> String {
        if self.is_result {
            format!("Result<{}, String>", self.base_type.to_rust_type())
        } else {
            self.base_type.to_rust_type()
        }
    }
}

/// A free function, or an interface method when it sits in an [`ExportedInterface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFunction {
    pub name: String,
    pub params: Vec<(String, FfiType)>,
    pub return_type: FfiReturn,
}

impl ExportedFunction {
    /// Name as seen from Kotlin (`say_hello` becomes `sayHello`).
    pub fn kotlin_name(&self) -> String {
        to_lower_camel_case(&self.name)
    }

    /// `fun name(params): Return`, without modifiers.
    pub fn kotlin_fun(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|(name, ty)| format!("{}: {}", to_lower_camel_case(name), ty.to_kotlin_type()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = format!("fun {}({})", self.kotlin_name(), params);
        if self.return_type.base_type != FfiType::Void {
            signature.push_str(": ");
            signature.push_str(self.return_type.to_kotlin_type());
        }
        signature
    }

    pub fn kotlin_signature(&self) -> String {
        format!("external {}", self.kotlin_fun())
    }

    /// Native symbol the JVM resolves for this function on `package.class`.
    pub fn jni_symbol(&self, package: &str, class: &str) -> String {
        let package = package
            .split('.')
            .map(jni_escape)
            .collect::<Vec<_>>()
            .join("_");
        format!(
            "Java_{}_{}_{}",
            package,
            jni_escape(class),
            jni_escape(&self.kotlin_name())
        )
    }
}

/// An #[ffi] trait; the host provides implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedInterface {
    pub name: String,
    pub methods: Vec<ExportedFunction>,
}

impl ExportedInterface {
    pub fn kotlin_declaration(&self) -> String {
        let mut out = format!("interface {} {{\n", self.name);
        for method in &self.methods {
            out.push_str("    ");
            out.push_str(&method.kotlin_fun());
            out.push('\n');
        }
        out.push('}');
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub interfaces: Vec<ExportedInterface>,
    pub functions: Vec<ExportedFunction>,
}

impl Surface {
    pub fn function(&self, name: &str) -> Option<&ExportedFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Every interface parameter must name an interface on this surface.
    fn check_interface_params(&self) -> Result<()> {
        for function in &self.functions {
            for (param, ty) in &function.params {
                if let FfiType::Interface(name) = ty {
                    if !self.interfaces.iter().any(|i| &i.name == name) {
                        bail!(
                            "Parameter '{}' of function '{}' uses '{}', which is not an #[ffi] interface",
                            param,
                            function.name,
                            name
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

/// The crate's own binding surface.
pub fn exported_surface() -> Result<Surface> {
    let interfaces = parse_exports(INTERFACES_SOURCE)
        .context("Failed to read the testsdk interface declarations")?;
    let exports =
        parse_exports(EXPORTS_SOURCE).context("Failed to read the testsdk binding surface")?;

    let mut surface = Surface {
        interfaces: interfaces.interfaces,
        functions: interfaces.functions,
    };
    surface.interfaces.extend(exports.interfaces);
    surface.functions.extend(exports.functions);

    surface.check_interface_params()?;
    Ok(surface)
}

/// Fail when `bindings` names a package or class other than the one the JNI
/// entry points were compiled for.
pub fn check_bindings(bindings: &BindingsConfig) -> Result<()> {
    if bindings.package != JNI_PACKAGE || bindings.class != JNI_CLASS {
        bail!(
            "bindings name `{}.{}`, but the library's JNI entry points are compiled for `{}.{}`",
            bindings.package,
            bindings.class,
            JNI_PACKAGE,
            JNI_CLASS
        );
    }
    Ok(())
}

/// Parse Rust source for #[ffi] functions and traits
pub fn parse_exports(content: &str) -> Result<Surface> {
    let syntax = syn::parse_file(content).context("Failed to parse Rust source")?;

    let mut surface = Surface::default();

    for item in syntax.items {
        match item {
            Item::Fn(func) if has_ffi_attribute(&func.attrs) => {
                surface.functions.push(parse_ffi_function(func)?);
            }
            Item::Trait(interface) if has_ffi_attribute(&interface.attrs) => {
                surface.interfaces.push(parse_ffi_interface(interface)?);
            }
            _ => {}
        }
    }

    Ok(surface)
}

fn has_ffi_attribute(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident("ffi"))
}

fn parse_ffi_function(func: ItemFn) -> Result<ExportedFunction> {
    let function_name = func.sig.ident.to_string();

    if let Some(FnArg::Receiver(_)) = func.sig.inputs.first() {
        bail!("FFI functions cannot have 'self' parameter in function '{}'", function_name);
    }

    parse_signature(&func.sig)
}

fn parse_ffi_interface(interface: ItemTrait) -> Result<ExportedInterface> {
    let interface_name = interface.ident.to_string();

    let mut methods = Vec::new();
    for item in &interface.items {
        if let TraitItem::Fn(method) = item {
            if !matches!(method.sig.inputs.first(), Some(FnArg::Receiver(_))) {
                bail!(
                    "Interface method '{}' of '{}' must take 'self'",
                    method.sig.ident,
                    interface_name
                );
            }

            let method = parse_signature(&method.sig)
                .context(format!("In interface '{}'", interface_name))?;
            if method
                .params
                .iter()
                .any(|(_, ty)| matches!(ty, FfiType::Interface(_)))
            {
                bail!(
                    "Interface method '{}' of '{}' cannot take another interface",
                    method.name,
                    interface_name
                );
            }
            methods.push(method);
        }
    }

    Ok(ExportedInterface {
        name: interface_name,
        methods,
    })
}

/// Parameters after an optional leading receiver, plus the return shape.
fn parse_signature(sig: &Signature) -> Result<ExportedFunction> {
    let function_name = sig.ident.to_string();

    let mut params = Vec::new();
    for (index, input) in sig.inputs.iter().enumerate() {
        match input {
            FnArg::Typed(pat_type) => {
                let param_name = match &*pat_type.pat {
                    Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
                    _ => bail!("Unsupported parameter pattern in function '{}'", function_name),
                };

                let param_type = FfiType::from_param_type(&pat_type.ty).context(format!(
                    "In parameter '{}' of function '{}'",
                    param_name, function_name
                ))?;
                if param_type == FfiType::Void {
                    bail!(
                        "Parameter '{}' of function '{}' has unit type",
                        param_name,
                        function_name
                    );
                }

                params.push((param_name, param_type));
            }
            FnArg::Receiver(_) if index == 0 => {}
            FnArg::Receiver(_) => {
                bail!("Misplaced 'self' parameter in function '{}'", function_name);
            }
        }
    }

    let return_type = match &sig.output {
        ReturnType::Default => FfiReturn::plain(FfiType::Void),
        ReturnType::Type(_, ty) => parse_return_type(ty, &function_name)?,
    };

    Ok(ExportedFunction {
        name: function_name,
        params,
        return_type,
    })
}

/// Parse a return type, detecting Result<T, E> wrappers
fn parse_return_type(ty: &Type, function_name: &str) -> Result<FfiReturn> {
    if let Type::Path(type_path) = ty {
        if let Some(last_segment) = type_path.path.segments.last() {
            if last_segment.ident == "Result" {
                if let syn::PathArguments::AngleBracketed(ref args) = last_segment.arguments {
                    if let Some(syn::GenericArgument::Type(inner_ty)) = args.args.first() {
                        let base_type = FfiType::from_syn_type(inner_ty).context(format!(
                            "In Result<T, E> return type of '{}'",
                            function_name
                        ))?;
                        return Ok(FfiReturn::result(base_type));
                    }
                }
                bail!(
                    "Result must have type parameters: Result<T, E> in function '{}'",
                    function_name
                );
            }
        }
    }

    let base_type = FfiType::from_syn_type(ty)
        .context(format!("In return type of '{}'", function_name))?;
    Ok(FfiReturn::plain(base_type))
}

fn to_lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;

    for ch in name.chars() {
        if ch == '_' {
            // Leading underscores stay as-is
            if out.is_empty() {
                out.push(ch);
            } else {
                upper_next = true;
            }
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// JNI short-name escaping for one identifier segment.
fn jni_escape(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        match ch {
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => out.push_str(&format!("_0{:04x}", c as u32)),
        }
    }
    out
}
