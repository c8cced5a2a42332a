//! testsdk FFI Macro
//!
//! Provides the #[ffi] attribute for marking functions and interfaces that
//! cross the mobile binding boundary. The binding surface inspector in
//! `testsdk` looks for this attribute when it lists what the host can call.
//!
//! The attribute leaves the item untouched, but it refuses shapes the
//! binding generator cannot express: private or generic items, async
//! functions, free functions taking `self`, and interface methods without it.

extern crate proc_macro;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{FnArg, Item, ItemFn, ItemTrait, Signature, TraitItem, Visibility};

/// Marker attribute for functions and interfaces exposed to the mobile host
///
/// # Example
/// ```ignore
/// #[ffi]
/// pub fn retrieve_val() -> i32 {
///     testsdk::retrieve_val()
/// }
///
/// #[ffi]
/// pub trait Computation {
///     fn compute(&mut self, one: i32, two: i32) -> String;
/// }
/// ```
#[proc_macro_attribute]
pub fn ffi(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(proc_macro::Span::call_site().into(), "#[ffi] takes no arguments")
            .to_compile_error()
            .into();
    }

    let item = match syn::parse::<Item>(item) {
        Ok(item) => item,
        Err(e) => return e.to_compile_error().into(),
    };

    let checked = match &item {
        Item::Fn(func) => check_function(func),
        Item::Trait(interface) => check_interface(interface),
        other => Err(syn::Error::new_spanned(
            other,
            "#[ffi] can only be applied to free functions and traits",
        )),
    };

    if let Err(e) = checked {
        return e.to_compile_error().into();
    }

    item.into_token_stream().into()
}

fn check_function(func: &ItemFn) -> syn::Result<()> {
    let sig = &func.sig;

    if !matches!(func.vis, Visibility::Public(_)) {
        return Err(syn::Error::new_spanned(
            &sig.ident,
            format!("#[ffi] function '{}' must be `pub` to cross the binding boundary", sig.ident),
        ));
    }

    check_signature(sig)?;

    for input in &sig.inputs {
        if let FnArg::Receiver(receiver) = input {
            return Err(syn::Error::new_spanned(
                receiver,
                "#[ffi] functions cannot take `self`; pass an object handle instead",
            ));
        }
    }

    Ok(())
}

fn check_interface(interface: &ItemTrait) -> syn::Result<()> {
    if !matches!(interface.vis, Visibility::Public(_)) {
        return Err(syn::Error::new_spanned(
            &interface.ident,
            format!("#[ffi] trait '{}' must be `pub` to cross the binding boundary", interface.ident),
        ));
    }

    if !interface.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &interface.generics,
            "#[ffi] traits cannot be generic",
        ));
    }

    for item in &interface.items {
        if let TraitItem::Fn(method) = item {
            check_signature(&method.sig)?;
            if !matches!(method.sig.inputs.first(), Some(FnArg::Receiver(_))) {
                return Err(syn::Error::new_spanned(
                    &method.sig.ident,
                    "#[ffi] trait methods must take `self` so the host can implement them",
                ));
            }
        }
    }

    Ok(())
}

fn check_signature(sig: &Signature) -> syn::Result<()> {
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[ffi] functions cannot be generic",
        ));
    }

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(asyncness, "#[ffi] functions cannot be async"));
    }

    Ok(())
}
