//! Low-level connector backed by the AWS Rust SDK.
//!
//! Validates the named parameters, checks the requested profile against the
//! shared files, loads the SDK configuration and builds the service client.
//! Every failure is reported through [`ConnectError`].

use crate::config::ConnectConfig;
use crate::connector::Connector;
use crate::error::{ConnectError, ConnectResult};
use crate::params::ConnectionParameters;
use crate::profile::{SharedFiles, active_profile};
use aws_config::BehaviorVersion;
use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::provider::error::CredentialsError;
use aws_types::SdkConfig;
use aws_types::app_name::AppName;
use aws_types::region::Region;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Services this connector can build clients for.
pub const KNOWN_SERVICES: &[&str] = &["s3", "sts"];

const INVALID_CONN_TYPE: &str = "There is an issue in the calling code. You must specify either both, resource, or client to the conn_type parameter in the boto3_conn function call";

const EXPLICIT_PROVIDER: &str = "explicit";

/// The kind of connection requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnType {
    Client,
    Resource,
    Both,
}

impl ConnType {
    pub fn parse(value: Option<&str>) -> ConnectResult<Self> {
        match value {
            Some("client") => Ok(Self::Client),
            Some("resource") => Ok(Self::Resource),
            Some("both") => Ok(Self::Both),
            _ => Err(ConnectError::Invalid(INVALID_CONN_TYPE.to_string())),
        }
    }
}

/// A service from [`KNOWN_SERVICES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    S3,
    Sts,
}

impl Service {
    pub fn parse(name: Option<&str>) -> ConnectResult<Self> {
        match name {
            Some("s3") => Ok(Self::S3),
            Some("sts") => Ok(Self::Sts),
            Some(other) => Err(ConnectError::UnknownService {
                service_name: other.to_string(),
                known_service_names: KNOWN_SERVICES.iter().map(|s| s.to_string()).collect(),
            }),
            None => Err(ConnectError::Invalid(
                "a service name is required in the resource parameter".to_string(),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Sts => "sts",
        }
    }
}

/// An SDK client for one service.
#[derive(Clone, Debug)]
pub enum ServiceClient {
    S3(aws_sdk_s3::Client),
    Sts(aws_sdk_sts::Client),
}

impl ServiceClient {
    fn build(service: Service, sdk_config: &SdkConfig, path_style: bool) -> Self {
        match service {
            Service::S3 => {
                let conf = aws_sdk_s3::config::Builder::from(sdk_config)
                    .force_path_style(path_style)
                    .build();
                Self::S3(aws_sdk_s3::Client::from_conf(conf))
            }
            Service::Sts => Self::Sts(aws_sdk_sts::Client::new(sdk_config)),
        }
    }

    pub fn service(&self) -> Service {
        match self {
            Self::S3(_) => Service::S3,
            Self::Sts(_) => Service::Sts,
        }
    }
}

/// A connection built by [`SdkConnector`].
///
/// The Rust SDK has no separate resource layer, so resource connections
/// are served by the same fluent client.
#[derive(Clone, Debug)]
pub enum AwsConnection {
    Client(ServiceClient),
    Resource(ServiceClient),
    Both {
        client: ServiceClient,
        resource: ServiceClient,
    },
}

/// Session settings recognised among the extra parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub profile_name: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl SessionOptions {
    /// Reads the recognised extras. Any other name, or a non-string value,
    /// is rejected.
    pub fn from_extra(extra: &BTreeMap<String, Value>) -> ConnectResult<Self> {
        let mut options = Self::default();
        for (name, value) in extra {
            let slot = match name.as_str() {
                "profile_name" => &mut options.profile_name,
                "aws_access_key_id" => &mut options.access_key_id,
                "aws_secret_access_key" => &mut options.secret_access_key,
                "aws_session_token" => &mut options.session_token,
                _ => {
                    return Err(ConnectError::Invalid(format!(
                        "unexpected connection parameter: {name}"
                    )));
                }
            };
            *slot = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                _ => {
                    return Err(ConnectError::Invalid(format!(
                        "connection parameter {name} must be a string"
                    )));
                }
            };
        }
        Ok(options)
    }

    /// Static credentials from an explicit key pair, if one was given.
    pub fn static_credentials(&self) -> ConnectResult<Option<Credentials>> {
        match (&self.access_key_id, &self.secret_access_key) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(partial("aws_secret_access_key")),
            (None, Some(_)) => Err(partial("aws_access_key_id")),
            (Some(key), Some(secret)) => Ok(Some(Credentials::new(
                key,
                secret,
                self.session_token.clone(),
                None,
                "awsplug-explicit",
            ))),
        }
    }
}

fn partial(cred_var: &str) -> ConnectError {
    ConnectError::PartialCredentials {
        provider: EXPLICIT_PROVIDER.to_string(),
        cred_var: cred_var.to_string(),
    }
}

/// Everything decided before the SDK configuration is loaded.
#[derive(Clone, Debug)]
pub struct ConnectPlan {
    pub conn_type: ConnType,
    pub service: Service,
    pub options: SessionOptions,
    /// Explicit `profile_name`, else `AWS_PROFILE`.
    pub profile: Option<String>,
    pub credentials: Option<Credentials>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// [`Connector`] that builds AWS SDK clients.
pub struct SdkConnector {
    config: ConnectConfig,
    files: SharedFiles,
}

impl SdkConnector {
    pub fn new(config: ConnectConfig) -> Self {
        let files = SharedFiles::resolve(&config);
        Self { config, files }
    }

    pub fn config(&self) -> &ConnectConfig {
        &self.config
    }

    /// Validates `params` and checks the requested profile. Touches the
    /// shared files only, never the network.
    pub async fn plan(&self, params: &ConnectionParameters) -> ConnectResult<ConnectPlan> {
        let conn_type = ConnType::parse(params.conn_type.as_deref())?;
        let service = Service::parse(params.resource.as_deref())?;
        let options = SessionOptions::from_extra(&params.extra)?;
        let credentials = options.static_credentials()?;

        let profile = active_profile(options.profile_name.as_deref());
        if let Some(profile) = &profile {
            self.files.require_profile(profile).await?;
        }

        Ok(ConnectPlan {
            conn_type,
            service,
            options,
            profile,
            credentials,
            region: params
                .region
                .clone()
                .or_else(|| self.config.default_region.clone()),
            endpoint: params
                .endpoint
                .clone()
                .or_else(|| self.config.endpoint_override.clone()),
        })
    }

    /// Shared files for the SDK when either path is configured explicitly.
    /// An unconfigured file keeps the SDK's default location.
    fn profile_files(&self) -> Option<ProfileFiles> {
        if self.config.config_file.is_none() && self.config.credentials_file.is_none() {
            return None;
        }

        let mut builder = ProfileFiles::builder();
        builder = match &self.config.config_file {
            Some(path) => builder.with_file(ProfileFileKind::Config, path),
            None => builder.include_default_config_file(true),
        };
        builder = match &self.config.credentials_file {
            Some(path) => builder.with_file(ProfileFileKind::Credentials, path),
            None => builder.include_default_credentials_file(true),
        };
        Some(builder.build())
    }

    async fn load_sdk_config(&self, plan: &ConnectPlan) -> ConnectResult<SdkConfig> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(files) = self.profile_files() {
            loader = loader.profile_files(files);
        }
        if let Some(profile) = &plan.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &plan.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &plan.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        if let Some(credentials) = &plan.credentials {
            loader = loader.credentials_provider(credentials.clone());
        }
        if let Some(name) = &self.config.app_name {
            let app_name = AppName::new(name.clone())
                .map_err(|e| ConnectError::Invalid(format!("invalid app name {name}: {e}")))?;
            loader = loader.app_name(app_name);
        }

        Ok(loader.load().await)
    }

    async fn check_credentials(&self, sdk_config: &SdkConfig) -> ConnectResult<()> {
        let Some(provider) = sdk_config.credentials_provider() else {
            return Err(ConnectError::NoCredentials);
        };

        match provider.provide_credentials().await {
            Ok(_) => Ok(()),
            Err(CredentialsError::CredentialsNotLoaded(_)) => Err(ConnectError::NoCredentials),
            Err(e) => {
                warn!("credential provider failed: {e}");
                Err(ConnectError::Sdk(e.to_string()))
            }
        }
    }
}

impl Connector for SdkConnector {
    type Connection = AwsConnection;

    async fn connect(&self, params: ConnectionParameters) -> ConnectResult<AwsConnection> {
        let plan = self.plan(&params).await?;
        debug!(
            "connecting to {} ({:?}), region {:?}, endpoint {:?}",
            plan.service.name(),
            plan.conn_type,
            plan.region,
            plan.endpoint
        );

        let sdk_config = self.load_sdk_config(&plan).await?;
        let Some(region) = sdk_config.region() else {
            return Err(ConnectError::NoRegion);
        };
        debug!("resolved region {region}");

        if self.config.eager_credentials && plan.credentials.is_none() {
            self.check_credentials(&sdk_config).await?;
        }

        let path_style = plan.endpoint.is_some();
        let build = || ServiceClient::build(plan.service, &sdk_config, path_style);
        let connection = match plan.conn_type {
            ConnType::Client => AwsConnection::Client(build()),
            ConnType::Resource => AwsConnection::Resource(build()),
            ConnType::Both => AwsConnection::Both {
                client: build(),
                resource: build(),
            },
        };

        debug!("connected to {}", plan.service.name());
        Ok(connection)
    }
}
