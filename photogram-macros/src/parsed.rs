use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitInt, Result, Type, TypePath, spanned::Spanned};

pub(crate) struct ParsedDraft {
    ident: Ident,
    generics: syn::Generics,
    fields: Vec<DraftField>,
}

struct DraftField {
    ident: Ident,
    required: bool,
    email: bool,
    max_len: Option<usize>,
}

impl ParsedDraft {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                _ => return Err(Error::new_spanned(input, "Draft only supports structs with named fields")),
            },
            _ => return Err(Error::new_spanned(input, "Draft can only be derived for structs")),
        };

        let mut fields = Vec::with_capacity(named.len());
        for field in named {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| Error::new(field.span(), "expected a named field"))?;
            let is_string = is_string_type(&field.ty);
            let mut required = false;
            let mut email = false;
            let mut max_len = None;

            for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("draft")) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("required") {
                        required = true;
                    } else if meta.path.is_ident("email") {
                        email = true;
                    } else if meta.path.is_ident("max_len") {
                        let value: LitInt = meta.value()?.parse()?;
                        let parsed = value.base10_parse::<usize>()?;
                        if parsed == 0 {
                            return Err(meta.error("max_len must be greater than zero"));
                        }
                        max_len = Some(parsed);
                    } else {
                        return Err(meta.error("unknown draft attribute, expected required, email or max_len"));
                    }
                    Ok(())
                })?;
            }

            if (required || email || max_len.is_some()) && !is_string {
                return Err(Error::new_spanned(&field.ty, "#[draft(...)] rules require a field of type String"));
            }

            fields.push(DraftField {
                ident,
                required,
                email,
                max_len,
            });
        }

        Ok(Self {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let ident = &self.ident;
        let kind = ident.to_string();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let checks = self.fields.iter().map(DraftField::emit_checks);

        quote! {
            impl #impl_generics ::photogram::Draft for #ident #ty_generics #where_clause {
                const KIND: &'static str = #kind;

                fn validate(&self) -> ::photogram::errors::ValidationResult<()> {
                    #[allow(unused_mut)]
                    let mut issues: ::std::vec::Vec<::photogram::errors::ValidationIssue> = ::std::vec::Vec::new();
                    #(#checks)*
                    if issues.is_empty() {
                        ::std::result::Result::Ok(())
                    } else {
                        ::std::result::Result::Err(::photogram::errors::ValidationError::new(issues))
                    }
                }
            }
        }
    }
}

impl DraftField {
    fn emit_checks(&self) -> TokenStream2 {
        let ident = &self.ident;
        let name = ident.to_string();

        let required = if self.required {
            let message = format!("{name} is required");
            quote! {
                if !::photogram::validators::is_present(&self.#ident) {
                    issues.push(::photogram::errors::ValidationIssue::new(#name, "required", #message));
                }
            }
        } else {
            quote! {}
        };

        // a blank required field reports `required` only
        let email = if self.email {
            let message = format!("{name} must be a valid email address");
            let check = quote! {
                if !::photogram::validators::is_valid_email(&self.#ident) {
                    issues.push(::photogram::errors::ValidationIssue::new(#name, "email", #message));
                }
            };
            if self.required { quote! { else #check } } else { check }
        } else {
            quote! {}
        };

        let max_len = match self.max_len {
            Some(max) => {
                let message = format!("{name} must be at most {max} characters");
                quote! {
                    if !::photogram::validators::within_length(&self.#ident, #max) {
                        issues.push(::photogram::errors::ValidationIssue::new(#name, "max_len", #message));
                    }
                }
            }
            None => quote! {},
        };

        quote! {
            #required #email
            #max_len
        }
    }
}

fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => path.segments.last().is_some_and(|segment| segment.ident == "String"),
        _ => false,
    }
}
