use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::path::PathBuf;

// Any path the bundle does not know is handed back to the SPA shell, which
// routes it client-side (or shows its own 404).
async fn spa() -> actix_web::Result<actix_files::NamedFile> {
    Ok(actix_files::NamedFile::open("../dist/index.html")?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/
    log::info!("serving portfolio bundle on 127.0.0.1:3000");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // ① top-level static assets (images, css)
            .service(Files::new("/assets", root.join("../assets")))
            // ② the SPA bundle built by Trunk / cargo-leptos
            .service(Files::new("/", "../dist").index_file("index.html"))
            // ③ fallback -> SPA for any other path
            .default_service(web::get().to(spa))
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await
}
