use storefront_app::auth::TokenSecret;

pub(crate) fn run() {
    println!("token_secret: {}", TokenSecret::generate().to_base64());
    println!("set TOKEN_SECRET to this value; rotating it invalidates every issued token");
}
