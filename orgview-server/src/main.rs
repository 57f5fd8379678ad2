// Copyright 2026 Orgview Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use std::path::PathBuf;

use orgview_server::config::ServerConfig;
use orgview_server::run_server;

#[derive(Parser, Debug)]
#[command(name = "orgview-server")]
#[command(about = "Public read API for organisations", long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, env = "ORGVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// HTTP listen address override
    #[arg(long, env = "ORGVIEW_HTTP_ADDR")]
    http_addr: Option<String>,

    /// Concepts API base URL override
    #[arg(long, env = "ORGVIEW_CONCEPTS_API_URL")]
    concepts_api_url: Option<String>,

    /// Cache-Control max-age override in seconds
    #[arg(long, env = "ORGVIEW_CACHE_MAX_AGE")]
    cache_max_age: Option<u64>,
}

/// Flags beat whatever the file/env load produced.
fn apply_overrides(mut config: ServerConfig, args: &Args) -> ServerConfig {
    if let Some(addr) = &args.http_addr {
        config.server.listen_addr = addr.clone();
    }
    if let Some(url) = &args.concepts_api_url {
        config.upstream.base_url = url.clone();
    }
    if let Some(max_age) = args.cache_max_age {
        config.cache.max_age_secs = max_age;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = apply_overrides(ServerConfig::load(args.config.clone())?, &args);
    run_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_loaded_config() {
        let args = Args::try_parse_from([
            "orgview-server",
            "--http-addr",
            "127.0.0.1:9090",
            "--concepts-api-url",
            "http://concepts.internal:9000",
            "--cache-max-age",
            "600",
        ])
        .unwrap();
        let config = apply_overrides(ServerConfig::default(), &args);
        assert_eq!(config.server.listen_addr, "127.0.0.1:9090");
        assert_eq!(config.upstream.base_url, "http://concepts.internal:9000");
        assert_eq!(config.cache_control(), "max-age=600, public");
    }

    #[test]
    fn absent_flags_leave_the_config_alone() {
        let args = Args::try_parse_from(["orgview-server"]).unwrap();
        let config = apply_overrides(ServerConfig::default(), &args);
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url, "http://localhost:8081");
        assert_eq!(config.cache.max_age_secs, 30);
    }
}
