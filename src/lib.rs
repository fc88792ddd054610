pub mod modules {
    pub mod products {
        pub mod core {
            pub mod errors;
            pub mod filters;
            pub mod ports;
            pub mod product;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod list_products {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patch_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod products_in_memory;
            }
        }
    }
}

pub mod shell;
