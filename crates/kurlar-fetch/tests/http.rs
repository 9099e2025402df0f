//! End-to-end tests of `RatesClient` over real HTTP against a local server.

use chrono::NaiveDate;
use kurlar_fetch::{
    CancellationToken, ClientConfig, ErrorKind, FetchError, RatesClient, TransportError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="isokur.xsl"?>
<Tarih_Date Tarih="01.01.2024" Date="01/01/2024" Bulten_No="2024/1">
    <Currency CrossOrder="0" Kod="USD" CurrencyCode="USD">
        <Unit>1</Unit>
        <Isim>ABD DOLARI</Isim>
        <CurrencyName>US DOLLAR</CurrencyName>
        <ForexBuying>27.1234</ForexBuying>
        <ForexSelling>27.1723</ForexSelling>
        <BanknoteBuying></BanknoteBuying>
        <BanknoteSelling>27.2131</BanknoteSelling>
        <CrossRateUSD/>
        <CrossRateOther/>
    </Currency>
    <Currency CrossOrder="9" Kod="JPY" CurrencyCode="JPY">
        <Unit>100</Unit>
        <Isim>JAPON YENİ</Isim>
        <CurrencyName>JAPENESE YEN</CurrencyName>
        <ForexBuying>20.8398</ForexBuying>
        <ForexSelling>20.9778</ForexSelling>
        <BanknoteBuying>20.7066</BanknoteBuying>
        <BanknoteSelling>21.1101</BanknoteSelling>
    </Currency>
</Tarih_Date>"#;

/// A canned HTTP response.
#[derive(Debug, Clone, Copy)]
struct Reply {
    status: u16,
    body: &'static str,
}

impl Reply {
    const fn ok(body: &'static str) -> Self {
        Self { status: 200, body }
    }

    const fn status(status: u16) -> Self {
        Self { status, body: "" }
    }
}

/// Local HTTP/1.1 server answering requests with `replies` in order; the last
/// reply repeats once the list runs out.
struct TestServer {
    base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    async fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/kurlar/", listener.local_addr().unwrap());
        let paths = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&paths);
        tokio::spawn(async move {
            let mut served = 0;
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                let reply = replies[served.min(replies.len() - 1)];
                served += 1;
                respond(socket, reply, &seen).await;
            }
        });

        Self { base_url, paths }
    }

    fn requests(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

/// Reads one request head, records its path, and writes `reply`.
async fn respond(mut socket: TcpStream, reply: Reply, seen: &Mutex<Vec<String>>) -> Option<()> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            return None;
        }
        head.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&head);
    let path = head.split_whitespace().nth(1)?.to_string();
    seen.lock().unwrap().push(path);

    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Type: application/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    socket.write_all(response.as_bytes()).await.ok()?;
    socket.shutdown().await.ok()
}

fn client(base_url: &str, retry_count: u32) -> RatesClient {
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_retry_count(retry_count)
        .with_retry_delay(Duration::ZERO)
        .with_timeout(Duration::from_secs(5));
    RatesClient::new(config).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_today_rates() {
    let server = TestServer::start(vec![Reply::ok(SHEET)]).await;
    let rates = client(&server.base_url, 3)
        .today_rates(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(rates.len(), 2);

    let usd = &rates[0];
    assert_eq!(usd.code(), "USD");
    assert_eq!(usd.unit(), 1);
    assert_eq!(usd.local_name(), Some("ABD DOLARI"));
    assert_eq!(usd.forex_buying(), dec!(27.1234));
    assert_eq!(usd.banknote_buying(), Decimal::ZERO);

    let jpy = &rates[1];
    assert_eq!(jpy.code(), "JPY");
    assert_eq!(jpy.unit(), 100);
    assert_eq!(jpy.banknote_selling(), dec!(21.1101));

    assert_eq!(server.requests(), ["/kurlar/today.xml"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sheet_by_date() {
    let server = TestServer::start(vec![Reply::ok(SHEET)]).await;
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let sheet = client(&server.base_url, 3)
        .sheet_by_date(date, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(sheet.date(), "01.01.2024");
    assert_eq!(sheet.published_on(), NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(server.requests(), ["/kurlar/202401/02012024.xml"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_errors_are_retried() {
    let server =
        TestServer::start(vec![Reply::status(503), Reply::status(500), Reply::ok(SHEET)]).await;
    let rates = client(&server.base_url, 3)
        .today_rates(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(rates.len(), 2);
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_archive_exhausts_retries() {
    let server = TestServer::start(vec![Reply::status(404)]).await;
    let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let err = client(&server.base_url, 2)
        .rates_by_date(date, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Transport {
            attempts: 2,
            source: TransportError::Status { status: 404 }
        }
    ));
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_html_page_is_malformed() {
    let page = "<html><body><h1>Bakim calismasi</h1></body></html>";
    let server = TestServer::start(vec![Reply::ok(page)]).await;
    let err = client(&server.base_url, 3)
        .today_rates(&CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Deserialization);
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_connection_refused_is_transient() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/kurlar", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&base_url, 2)
        .today_rates(&CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, FetchError::Transport { attempts: 2, .. }));
}
