use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{Error, Item, parse_macro_input};

/// Marker attribute that opts a type into build-time property-map
/// generation.
///
/// Zero-argument, struct-only, and not repeatable. Expands to the item
/// unchanged; the actual generation happens in `reflectgen-build`, which
/// matches the attribute textually in source.
#[proc_macro_attribute]
pub fn reflect(args: TokenStream, input: TokenStream) -> TokenStream {
    let args: proc_macro2::TokenStream = args.into();
    let item = parse_macro_input!(input as Item);

    if let Err(err) = validate(&args, &item) {
        let mut tokens = err.to_compile_error();
        item.to_tokens(&mut tokens);
        return tokens.into();
    }

    item.into_token_stream().into()
}

fn validate(args: &proc_macro2::TokenStream, item: &Item) -> Result<(), Error> {
    if !args.is_empty() {
        return Err(Error::new_spanned(args, "reflect takes no arguments"));
    }

    let Item::Struct(item_struct) = item else {
        return Err(Error::new_spanned(
            item,
            "reflect can only be applied to structs",
        ));
    };

    // The attribute itself is already stripped; a second occurrence still
    // sitting on the struct means it was written twice.
    if item_struct.attrs.iter().any(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "reflect")
    }) {
        return Err(Error::new_spanned(
            &item_struct.ident,
            "reflect cannot be applied more than once",
        ));
    }

    Ok(())
}
