//! Disposable Postgres databases for integration tests.
//!
//! Each call to [`start_postgres`] yields a freshly created database that is
//! dropped again when the returned handle goes out of scope. Callers decide
//! whether an error means "skip" or "fail".

use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::str::FromStr;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, anyhow, bail};
use postgres::NoTls;
use url::Url;

/// Environment variable pointing at an existing server to create test databases on.
pub const TEST_DATABASE_URL_ENV: &str = "TESSERA_TEST_DATABASE_URL";

const SERVER_BINARIES: [&str; 3] = ["initdb", "postgres", "pg_isready"];
const READY_ATTEMPTS: usize = 30;
const READY_INTERVAL: Duration = Duration::from_millis(200);

/// Handle to a disposable database, and the server process when one was spawned.
pub struct TestDatabase {
    connection_string: String,
    admin_url: String,
    database: String,
    _server: Option<LocalServer>,
}

struct LocalServer {
    process: Child,
    data_dir: PathBuf,
}

impl TestDatabase {
    /// Connection string for the freshly created database.
    #[must_use]
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let _ = run_admin_statement(
            &self.admin_url,
            format!("DROP DATABASE IF EXISTS \"{}\"", self.database),
        );
    }
}

impl Drop for LocalServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
        let _ = fs::remove_dir_all(&self.data_dir);
    }
}

/// Create a disposable database.
///
/// Uses the server named by `TESSERA_TEST_DATABASE_URL` when set; otherwise
/// spawns a throwaway server from locally installed `initdb`/`postgres` binaries.
///
/// # Errors
///
/// Returns an error if no server URL is configured and the binaries are missing
/// or fail to start, or if the database cannot be created.
pub fn start_postgres() -> Result<TestDatabase> {
    if let Ok(url) = std::env::var(TEST_DATABASE_URL_ENV) {
        return create_database_on(&url, None);
    }

    let (server, port) = spawn_local_server()?;
    let base_url = format!("postgres://postgres@127.0.0.1:{port}/postgres");
    create_database_on(&base_url, Some(server))
}

fn create_database_on(base_url: &str, server: Option<LocalServer>) -> Result<TestDatabase> {
    let parsed = Url::parse(base_url).context("invalid postgres connection url")?;
    let database = unique_database_name();

    let mut admin = parsed.clone();
    admin.set_path("/postgres");
    let admin_url = admin.to_string();
    run_admin_statement(&admin_url, format!("CREATE DATABASE \"{database}\""))
        .context("failed to create test database")?;

    let mut target = parsed;
    target.set_path(&format!("/{database}"));

    Ok(TestDatabase {
        connection_string: target.to_string(),
        admin_url,
        database,
        _server: server,
    })
}

fn spawn_local_server() -> Result<(LocalServer, u16)> {
    let [initdb, postgres, pg_isready] = SERVER_BINARIES.map(resolve_binary);
    let (initdb, postgres, pg_isready) = (initdb?, postgres?, pg_isready?);

    let port = reserve_port()?;
    let data_dir = create_data_dir()?;
    let data_dir_arg = data_dir
        .to_str()
        .context("data dir contains non-utf8 characters")?;

    let status = Command::new(&initdb)
        .args(["-D", data_dir_arg, "--username=postgres", "--auth=trust"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("failed to run initdb")?;
    if !status.success() {
        bail!("initdb exited with failure status");
    }

    let process = Command::new(&postgres)
        .args(["-D", data_dir_arg, "-p", &port.to_string(), "-h", "127.0.0.1"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to start postgres process")?;
    let server = LocalServer { process, data_dir };

    wait_for_ready(&pg_isready, port)?;
    Ok((server, port))
}

fn resolve_binary(name: &str) -> Result<PathBuf> {
    std::env::var_os("PATH")
        .map_or_else(Vec::new, |paths| std::env::split_paths(&paths).collect())
        .into_iter()
        .chain([PathBuf::from("/usr/lib/postgresql/16/bin"), PathBuf::from("/usr/local/bin")])
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
        .ok_or_else(|| anyhow!("{name} binary is required for Postgres tests"))
}

fn reserve_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("failed to reserve port")?;
    Ok(listener
        .local_addr()
        .context("failed to read listener address")?
        .port())
}

fn create_data_dir() -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("tessera-pg-{}", unique_suffix()));
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data dir {}", dir.display()))?;
    Ok(dir)
}

fn wait_for_ready(pg_isready: &Path, port: u16) -> Result<()> {
    for _ in 0..READY_ATTEMPTS {
        let ready = Command::new(pg_isready)
            .args(["-h", "127.0.0.1", "-p", &port.to_string(), "-U", "postgres"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success());
        if ready {
            return Ok(());
        }
        thread::sleep(READY_INTERVAL);
    }
    bail!("postgres process did not become ready in time")
}

// The sync client drives its own runtime, so keep it off any async test thread.
fn run_admin_statement(admin_url: &str, statement: String) -> Result<()> {
    let admin_url = admin_url.to_string();
    thread::spawn(move || -> Result<()> {
        let mut client = postgres::Config::from_str(&admin_url)?.connect(NoTls)?;
        client
            .simple_query(&statement)
            .map(|_| ())
            .with_context(|| format!("failed to run `{statement}`"))
    })
    .join()
    .unwrap_or_else(|_| Err(anyhow!("admin statement thread panicked")))
}

fn unique_database_name() -> String {
    format!("tessera_test_{}", unique_suffix())
}

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("{}_{nanos}", std::process::id())
}
