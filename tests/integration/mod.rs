use sqlx::{Connection, Executor, MySqlConnection};
use testcontainers_modules::mysql::Mysql;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;


/// Database the container image creates on start
pub const TEST_DB: &str = "test";

pub struct TestDb {
    pub connection_string: String,
    // Keeps the container alive for the duration of the test
    #[allow(dead_code)]
    container: ContainerAsync<Mysql>,
}

impl TestDb {
    pub async fn connect(&self) -> MySqlConnection {
        MySqlConnection::connect(&self.connection_string)
            .await
            .expect("connection to be established")
    }

    /// Run a batch of `;`-separated statements
    pub async fn execute(&self, sql: &str) {
        let mut conn = self.connect().await;
        for stmt in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            conn.execute(stmt).await.expect("statement to succeed");
        }
    }
}

pub async fn setup_test_db() -> TestDb {
    let container = Mysql::default().start().await.expect("container to start");

    let connection_string = format!(
        "mysql://root@{}:{}/{}",
        container.get_host().await.expect("host to be present"),
        container
            .get_host_port_ipv4(3306)
            .await
            .expect("port to be present"),
        TEST_DB,
    );

    TestDb {
        connection_string,
        container,
    }
}
