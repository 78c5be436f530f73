// FTP file system for maintaining the mod installation on the server itself

use crate::fs::FileSystem;
use anyhow::Context;
use log::{debug, info, warn};
use std::net::ToSocketAddrs;
use std::sync::Mutex;
use std::time::Duration;
use suppaftp::{FtpError, FtpResult, FtpStream, Status};

const DEFAULT_FTP_PORT: u16 = 21;

/// Connection details for the server's FTP endpoint
#[derive(Debug, Clone)]
pub struct FtpArgs {
    pub server: String,
    pub user: String,
    pub password: String,
    pub timeout_ms: u64,
}

/// The FTP commands used by `FtpFileSystem`
pub trait FtpConnection: Send {
    fn login(&mut self, user: &str, password: &str) -> anyhow::Result<()>;

    fn stor(&mut self, path: &str, data: &[u8]) -> anyhow::Result<()>;

    /// Fetch a file; `None` if the server reports it unavailable
    fn retr(&mut self, path: &str) -> anyhow::Result<Option<Vec<u8>>>;

    /// Create a directory; an existing directory is not an error
    fn make_dir(&mut self, dir: &str) -> anyhow::Result<()>;

    fn quit(&mut self) -> anyhow::Result<()>;
}

impl FtpConnection for FtpStream {
    fn login(&mut self, user: &str, password: &str) -> anyhow::Result<()> {
        FtpStream::login(self, user, password)?;
        Ok(())
    }

    fn stor(&mut self, path: &str, data: &[u8]) -> anyhow::Result<()> {
        let mut reader = data;
        self.put_file(path, &mut reader)?;
        Ok(())
    }

    fn retr(&mut self, path: &str) -> anyhow::Result<Option<Vec<u8>>> {
        match self.retr_as_buffer(path) {
            Ok(cursor) => Ok(Some(cursor.into_inner())),
            Err(FtpError::UnexpectedResponse(response))
                if response.status == Status::FileUnavailable =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn make_dir(&mut self, dir: &str) -> anyhow::Result<()> {
        mkdir_outcome(dir, self.mkdir(dir))
    }

    fn quit(&mut self) -> anyhow::Result<()> {
        FtpStream::quit(self)?;
        Ok(())
    }
}

/// File system backed by an FTP session; paths are rooted at the FTP root
pub struct FtpFileSystem {
    conn: Mutex<Box<dyn FtpConnection>>,
}

impl FtpFileSystem {
    /// Dial the server and log in
    pub fn connect(args: &FtpArgs) -> anyhow::Result<Self> {
        Self::connect_with(args, dial)
    }

    pub fn connect_with<F>(args: &FtpArgs, dial: F) -> anyhow::Result<Self>
    where
        F: FnOnce(&str, Duration) -> anyhow::Result<Box<dyn FtpConnection>>,
    {
        if args.password.is_empty() || args.user.is_empty() || args.server.is_empty() {
            anyhow::bail!("FTP access requires a username, password, and server");
        }

        info!("Connecting FTP to {}", args.server);
        let mut conn = dial(&args.server, Duration::from_millis(args.timeout_ms))?;

        info!("Logging in ({})", args.user);
        conn.login(&args.user, &args.password)?;

        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Box<dyn FtpConnection>) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn with_conn<T>(
        &self,
        op: impl FnOnce(&mut dyn FtpConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| anyhow::anyhow!("FTP connection lock poisoned"))?;
        op(&mut **conn)
    }
}

impl FileSystem for FtpFileSystem {
    fn write_file(&self, rel_path: &str, data: &[u8]) -> anyhow::Result<()> {
        let path = ftp_path(rel_path);
        if let Some(parent) = parent_dir(&path) {
            self.mkdir_all(parent)?;
        }
        self.with_conn(|conn| conn.stor(&path, data))
            .with_context(|| format!("failed to upload {}", path))
    }

    fn read_file(&self, rel_path: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let path = ftp_path(rel_path);
        self.with_conn(|conn| conn.retr(&path))
    }

    fn mkdir_all(&self, rel_path: &str) -> anyhow::Result<()> {
        let dirs = recursive_dirs(&ftp_path(rel_path));
        self.with_conn(|conn| {
            for dir in &dirs {
                conn.make_dir(dir)?;
            }
            Ok(())
        })
    }

    fn close(&self) {
        if let Err(e) = self.with_conn(|conn| conn.quit()) {
            warn!("FTP quit failed: {}", e);
        }
    }
}

/// Servers answer MKD of an existing directory with 550; every other failure is real
fn mkdir_outcome(dir: &str, result: FtpResult<()>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(FtpError::UnexpectedResponse(response))
            if response.status == Status::FileUnavailable =>
        {
            debug!("MKD {} refused with 550; assuming it exists", dir);
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("failed to create FTP directory {}", dir)),
    }
}

fn dial(server: &str, timeout: Duration) -> anyhow::Result<Box<dyn FtpConnection>> {
    let address = if server.contains(':') {
        server.to_string()
    } else {
        format!("{}:{}", server, DEFAULT_FTP_PORT)
    };
    let socket = address
        .to_socket_addrs()
        .with_context(|| format!("could not resolve FTP server {}", address))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no address found for FTP server {}", address))?;

    let stream = FtpStream::connect_timeout(socket, timeout)
        .with_context(|| format!("could not connect to FTP server {}", address))?;
    Ok(Box::new(stream))
}

/// Convert a relative path to the `/`-rooted form the FTP server expects
pub fn ftp_path(rel_path: &str) -> String {
    format!("/{}", rel_path.replace('\\', "/").trim_start_matches('/'))
}

fn parent_dir(path: &str) -> Option<&str> {
    match path.rfind('/') {
        Some(0) | None => None,
        Some(idx) => Some(&path[..idx]),
    }
}

/// Every directory on the way down to `dir`, outermost first
pub fn recursive_dirs(dir: &str) -> Vec<String> {
    let mut dirs = Vec::new();
    let mut current = dir.trim_end_matches('/');
    while !current.is_empty() && current != "." {
        dirs.push(current.to_string());
        current = match parent_dir(current) {
            Some(parent) => parent,
            None => break,
        };
    }
    dirs.reverse();
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex as StdMutex};
    use suppaftp::types::Response;

    #[derive(Default)]
    struct Recorded {
        commands: Vec<String>,
        files: HashMap<String, Vec<u8>>,
    }

    struct FakeConnection {
        recorded: Arc<StdMutex<Recorded>>,
        fail_login: bool,
        fail_mkdir: bool,
    }

    impl FtpConnection for FakeConnection {
        fn login(&mut self, user: &str, _password: &str) -> anyhow::Result<()> {
            self.recorded.lock().unwrap().commands.push(format!("USER {}", user));
            if self.fail_login {
                anyhow::bail!("530 Login incorrect");
            }
            Ok(())
        }

        fn stor(&mut self, path: &str, data: &[u8]) -> anyhow::Result<()> {
            let mut recorded = self.recorded.lock().unwrap();
            recorded.commands.push(format!("STOR {}", path));
            recorded.files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn retr(&mut self, path: &str) -> anyhow::Result<Option<Vec<u8>>> {
            let mut recorded = self.recorded.lock().unwrap();
            recorded.commands.push(format!("RETR {}", path));
            Ok(recorded.files.get(path).cloned())
        }

        fn make_dir(&mut self, dir: &str) -> anyhow::Result<()> {
            self.recorded.lock().unwrap().commands.push(format!("MKD {}", dir));
            mkdir_outcome(
                dir,
                if self.fail_mkdir {
                    Err(refusal(Status::NotLoggedIn))
                } else {
                    Ok(())
                },
            )
        }

        fn quit(&mut self) -> anyhow::Result<()> {
            self.recorded.lock().unwrap().commands.push("QUIT".to_string());
            Ok(())
        }
    }

    fn fake(recorded: &Arc<StdMutex<Recorded>>) -> Box<dyn FtpConnection> {
        Box::new(FakeConnection {
            recorded: Arc::clone(recorded),
            fail_login: false,
            fail_mkdir: false,
        })
    }

    fn refusal(status: Status) -> FtpError {
        FtpError::UnexpectedResponse(Response::new(status, Vec::new()))
    }

    fn args() -> FtpArgs {
        FtpArgs {
            server: "mc.example:21".to_string(),
            user: "steve".to_string(),
            password: "hunter2".to_string(),
            timeout_ms: 5000,
        }
    }

    #[test]
    fn test_recursive_dirs() {
        assert_eq!(recursive_dirs("/mods/a/b"), vec!["/mods", "/mods/a", "/mods/a/b"]);
        assert_eq!(recursive_dirs("mods/a"), vec!["mods", "mods/a"]);
        assert!(recursive_dirs("/").is_empty());
        assert!(recursive_dirs(".").is_empty());
    }

    #[test]
    fn test_ftp_path() {
        assert_eq!(ftp_path("mods/x.jar"), "/mods/x.jar");
        assert_eq!(ftp_path("mods\\x.jar"), "/mods/x.jar");
        assert_eq!(ftp_path("/mods"), "/mods");
    }

    #[test]
    fn test_connect_requires_credentials() {
        let mut missing = args();
        missing.password.clear();

        let result = FtpFileSystem::connect_with(&missing, |_, _| unreachable!());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("requires a username, password, and server"));
    }

    #[test]
    fn test_connect_logs_in() {
        let recorded = Arc::new(StdMutex::new(Recorded::default()));
        let mut dialed = None;

        FtpFileSystem::connect_with(&args(), |server, timeout| {
            dialed = Some((server.to_string(), timeout));
            Ok(fake(&recorded))
        })
        .unwrap();

        assert_eq!(
            dialed,
            Some(("mc.example:21".to_string(), Duration::from_millis(5000)))
        );
        assert_eq!(recorded.lock().unwrap().commands, vec!["USER steve"]);
    }

    #[test]
    fn test_connect_propagates_login_failure() {
        let recorded = Arc::new(StdMutex::new(Recorded::default()));
        let result = FtpFileSystem::connect_with(&args(), |_, _| {
            Ok(Box::new(FakeConnection {
                recorded: Arc::clone(&recorded),
                fail_login: true,
                fail_mkdir: false,
            }))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_dirs_then_stores() {
        let recorded = Arc::new(StdMutex::new(Recorded::default()));
        let fs = FtpFileSystem::from_connection(fake(&recorded));

        fs.write_file("mods/sodium.jar", b"jar").unwrap();
        fs.close();

        let recorded = recorded.lock().unwrap();
        assert_eq!(
            recorded.commands,
            vec!["MKD /mods", "STOR /mods/sodium.jar", "QUIT"]
        );
        assert_eq!(recorded.files["/mods/sodium.jar"], b"jar");
    }

    #[test]
    fn test_read_roundtrip_and_missing() {
        let recorded = Arc::new(StdMutex::new(Recorded::default()));
        let fs = FtpFileSystem::from_connection(fake(&recorded));

        assert!(fs.read_file("mods/mcmods-install.json").unwrap().is_none());
        fs.write_file("mods/mcmods-install.json", b"{}").unwrap();
        assert_eq!(
            fs.read_file("mods/mcmods-install.json").unwrap(),
            Some(b"{}".to_vec())
        );
    }

    #[test]
    fn test_mkdir_tolerates_existing_dir_only() {
        assert!(mkdir_outcome("/mods", Ok(())).is_ok());
        assert!(mkdir_outcome("/mods", Err(refusal(Status::FileUnavailable))).is_ok());

        let err = mkdir_outcome("/mods", Err(refusal(Status::NotLoggedIn))).unwrap_err();
        assert!(err.to_string().contains("/mods"), "{}", err);
    }

    #[test]
    fn test_write_stops_when_mkdir_fails() {
        let recorded = Arc::new(StdMutex::new(Recorded::default()));
        let fs = FtpFileSystem::from_connection(Box::new(FakeConnection {
            recorded: Arc::clone(&recorded),
            fail_login: false,
            fail_mkdir: true,
        }));

        let err = fs.write_file("mods/sodium.jar", b"jar").unwrap_err();

        assert!(format!("{:#}", err).contains("failed to create FTP directory /mods"));
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.commands, vec!["MKD /mods"]);
        assert!(recorded.files.is_empty());
    }
}
