// src/test_support.rs
// Fixture catalogue pages and a throwaway HTTP server that serves them.
// Only compiled for tests.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use url::Url;

/// Markup for book `n` on page `page`: "Book <page>-<n>", priced £<n>.50,
/// rated Three, in stock.
pub fn item(page: usize, n: usize) -> String {
    format!(
        r#"<li class="col-xs-6 col-sm-4 col-md-3 col-lg-3">
<article class="product_pod">
  <div class="image_container">
    <a href="book-{page}-{n}_{id}/index.html"><img src="../media/cache/{id}.jpg" alt="Book {page}-{n}" class="thumbnail"></a>
  </div>
  <p class="star-rating Three">
    <i class="icon-star"></i><i class="icon-star"></i><i class="icon-star"></i>
  </p>
  <h3><a href="book-{page}-{n}_{id}/index.html" title="Book {page}-{n}">Book {page}-{n}</a></h3>
  <div class="product_price">
    <p class="price_color">£{n}.50</p>
    <p class="instock availability">
      <i class="icon-ok"></i>
      In stock
    </p>
    <form><button type="submit" class="btn btn-primary btn-block">Add to basket</button></form>
  </div>
</article>
</li>"#,
        id = page * 1000 + n,
    )
}

pub fn catalogue_page(items: &[String], has_next: bool) -> String {
    let next = if has_next {
        r#"<li class="next"><a href="page-next.html">next</a></li>"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en-us">
<head><title>All products | Books to Scrape - Sandbox</title></head>
<body>
  <div class="page_inner">
    <section>
      <div><ol class="row">
{items}
      </ol>
      <div><ul class="pager"><li class="current">Page</li>{next}</ul></div>
      </div>
    </section>
  </div>
</body>
</html>"#,
        items = items.concat(),
    )
}

/// Serves `pages[i]` at `/catalogue/page-<i+1>.html`; everything else is 404.
pub struct FixtureServer {
    addr: String,
    shutdown: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl FixtureServer {
    pub fn new(pages: Vec<String>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
        let addr = server.server_addr().to_string();
        let (shutdown, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            let request = match server.recv_timeout(Duration::from_millis(20)) {
                Ok(Some(request)) => request,
                Ok(None) => continue,
                Err(_) => break,
            };

            let body = request
                .url()
                .strip_prefix("/catalogue/page-")
                .and_then(|rest| rest.strip_suffix(".html"))
                .and_then(|n| n.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| pages.get(i).cloned());

            let response = match body {
                Some(html) => tiny_http::Response::from_string(html).with_header(
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
                        .expect("static header"),
                ),
                None => tiny_http::Response::from_string("not found").with_status_code(404),
            };
            let _ = request.respond(response);
        });

        Self {
            addr,
            shutdown,
            handle: Some(handle),
        }
    }

    /// `count` pages of `per_page` items; every page but the last links onward.
    pub fn with_pages(count: usize, per_page: usize) -> Self {
        let pages = (1..=count)
            .map(|page| {
                let items: Vec<String> = (1..=per_page).map(|n| item(page, n)).collect();
                catalogue_page(&items, page < count)
            })
            .collect();
        Self::new(pages)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn catalogue_url(&self) -> Url {
        Url::parse(&format!("http://{}/catalogue/", self.addr)).expect("fixture url")
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
