//! Procedural macros for the aoc-puzzle-io library

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Expr, Ident, ItemFn, Lit};

/// Attribute macro that checks a solution function against its example file
///
/// The annotated function is emitted unchanged, followed by a `#[test]`
/// function that runs it once on `input/day_<day>_example.txt` and panics
/// with `Expected: X, Got: Y` when the answer differs.
///
/// # Attributes
///
/// - `day`: Required. Integer or string literal used in the file name
/// - `expected`: Required. Any expression of the function's return type
/// - `dir`: Optional. Expression convertible to `PathBuf` used instead of `input`
/// - `name`: Optional. Name of the generated test (default `<fn>_example`)
///
/// The function must be a free function taking `Vec<String>`. The attribute
/// may be repeated on one function as long as each use has a distinct `name`.
///
/// # Example
///
/// ```ignore
/// use aoc_puzzle_io::aoc_example;
///
/// #[aoc_example(day = 1, expected = 142)]
/// #[aoc_example(day = "1_2", expected = 209, name = part1_second_example)]
/// pub fn part1(lines: Vec<String>) -> u32 {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn aoc_example(args: TokenStream, item: TokenStream) -> TokenStream {
    expand_attribute(args.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_attribute(args: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let mut attrs = ExampleAttrs::default();
    syn::meta::parser(|meta| attrs.parse(meta)).parse2(args)?;

    let func: ItemFn = syn::parse2(item)?;
    expand(attrs, func)
}

#[derive(Default)]
struct ExampleAttrs {
    day: Option<Lit>,
    expected: Option<Expr>,
    dir: Option<Expr>,
    name: Option<Ident>,
}

impl ExampleAttrs {
    fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(_) | Lit::Str(_) => self.day = Some(value),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "`day` must be an integer or string literal",
                    ));
                }
            }
        } else if meta.path.is_ident("expected") {
            self.expected = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("dir") {
            self.dir = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("name") {
            self.name = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error(
                "unsupported aoc_example property, expected `day`, `expected`, `dir` or `name`",
            ));
        }
        Ok(())
    }
}

fn expand(attrs: ExampleAttrs, func: ItemFn) -> syn::Result<TokenStream2> {
    let fn_name = &func.sig.ident;

    let day = attrs
        .day
        .ok_or_else(|| syn::Error::new(Span::call_site(), "missing required `day` property"))?;
    let expected = attrs.expected.ok_or_else(|| {
        syn::Error::new(Span::call_site(), "missing required `expected` property")
    })?;
    let test_name = attrs
        .name
        .unwrap_or_else(|| format_ident!("{}_example", fn_name));

    let check = match attrs.dir {
        Some(dir) => quote! {
            ::aoc_puzzle_io::InputDir::new(#dir).assert_example(#day, #fn_name, #expected)
        },
        None => quote! {
            ::aoc_puzzle_io::assert_example(#day, #fn_name, #expected)
        },
    };

    Ok(quote! {
        #func

        #[cfg(test)]
        #[test]
        fn #test_name() {
            #check;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> TokenStream2 {
        quote! {
            fn part1(lines: Vec<String>) -> usize {
                lines.len()
            }
        }
    }

    fn expand_err(args: TokenStream2) -> String {
        expand_attribute(args, solution()).unwrap_err().to_string()
    }

    /// Names of the top-level functions in an expansion
    fn fn_names(tokens: TokenStream2) -> Vec<String> {
        let file: syn::File = syn::parse2(tokens).unwrap();
        file.items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Fn(f) => Some(f.sig.ident.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_missing_day_rejected() {
        assert_eq!(
            expand_err(quote!(expected = 3)),
            "missing required `day` property"
        );
    }

    #[test]
    fn test_missing_expected_rejected() {
        assert_eq!(
            expand_err(quote!(day = 1)),
            "missing required `expected` property"
        );
    }

    #[test]
    fn test_unknown_property_rejected() {
        let err = expand_err(quote!(day = 1, expected = 3, answer = 4));
        assert!(err.starts_with("unsupported aoc_example property"), "{}", err);
    }

    #[test]
    fn test_non_literal_day_rejected() {
        assert_eq!(
            expand_err(quote!(day = 1.5, expected = 3)),
            "`day` must be an integer or string literal"
        );
        assert_eq!(
            expand_err(quote!(day = true, expected = 3)),
            "`day` must be an integer or string literal"
        );
    }

    #[test]
    fn test_non_function_rejected() {
        let result = expand_attribute(quote!(day = 1, expected = 3), quote!(struct Day1;));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_test_name() {
        let tokens = expand_attribute(quote!(day = 1, expected = 3), solution()).unwrap();
        assert_eq!(fn_names(tokens), vec!["part1", "part1_example"]);
    }

    #[test]
    fn test_custom_name_and_dir() {
        let tokens = expand_attribute(
            quote!(day = "1_2", expected = 3, dir = "fixtures", name = second_example),
            solution(),
        )
        .unwrap();

        let rendered = tokens.to_string().replace(' ', "");
        assert!(rendered.contains("::aoc_puzzle_io::InputDir::new(\"fixtures\")"), "{}", rendered);
        assert_eq!(fn_names(tokens), vec!["part1", "second_example"]);
    }

    #[test]
    fn test_default_dir_uses_free_function() {
        let tokens = expand_attribute(quote!(day = 1, expected = 3), solution()).unwrap();

        let rendered = tokens.to_string().replace(' ', "");
        assert!(
            rendered.contains("::aoc_puzzle_io::assert_example(1,part1,3)"),
            "{}",
            rendered
        );
        assert!(!rendered.contains("InputDir"));
    }
}
