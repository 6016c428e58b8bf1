//! `AWS::Kendra::DataSource`
//!
//! https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-kendra-datasource.html

use super::S3Path;
use crate::intrinsic::{List, Value};
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// Creates a data source connector that you want to use with an Amazon Kendra index
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DataSource {
    /// Length 1-1000, pattern `^[a-zA-Z0-9][a-zA-Z0-9_-]*`
    pub name: Value<String>,

    /// Identifier of the index to associate the data source with. Length 36-36.
    ///
    /// Update requires replacement.
    pub index_id: Value<String>,

    /// One of `S3`, `SHAREPOINT`, `SALESFORCE`, `ONEDRIVE`, `SERVICENOW`, `DATABASE`,
    /// `CUSTOM`, `CONFLUENCE`, `GOOGLEDRIVE`, `WEBCRAWLER`, `WORKDOCS`.
    ///
    /// Update requires replacement.
    #[serde(rename = "Type")]
    pub data_source_type: Value<String>,

    /// Length 0-1000
    pub description: Option<Value<String>>,

    /// Required unless `Type` is `CUSTOM`
    pub data_source_configuration: Option<Value<DataSourceConfiguration>>,

    /// IAM role with permission to access the data source. Required unless `Type` is `CUSTOM`.
    pub role_arn: Option<Value<String>>,

    /// Cron expression for synchronizing the data source with the index. Length 0-1000.
    pub schedule: Option<Value<String>>,

    /// Up to 200 tags
    pub tags: Option<Value<Vec<Tag>>>,

    pub custom_document_enrichment_configuration: Option<Value<CustomDocumentEnrichmentConfiguration>>,
}

/// Connection details for the data source repository, exactly one member is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DataSourceConfiguration {
    pub s3_configuration: Option<Value<S3DataSourceConfiguration>>,
    pub share_point_configuration: Option<Value<SharePointConfiguration>>,
    pub salesforce_configuration: Option<Value<SalesforceConfiguration>>,
    pub one_drive_configuration: Option<Value<OneDriveConfiguration>>,
    pub service_now_configuration: Option<Value<ServiceNowConfiguration>>,
    pub database_configuration: Option<Value<DatabaseConfiguration>>,
    pub confluence_configuration: Option<Value<ConfluenceConfiguration>>,
    pub google_drive_configuration: Option<Value<GoogleDriveConfiguration>>,
    pub web_crawler_configuration: Option<Value<WebCrawlerConfiguration>>,
    pub work_docs_configuration: Option<Value<WorkDocsConfiguration>>,
}

/// Maps a field of the repository to an index field
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DataSourceToIndexFieldMapping {
    /// Length 1-100
    pub data_source_field_name: Value<String>,

    /// Format of dates in the source field, e.g. `yyyy-MM-dd'T'HH:mm:ss'Z'`. Length 4-40.
    pub date_field_format: Option<Value<String>>,

    /// Length 1-30
    pub index_field_name: Value<String>,
}

/// Subnets and security groups used to reach a repository inside a VPC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DataSourceVpcConfiguration {
    /// 1-6 subnet IDs
    pub subnet_ids: List<String>,

    /// 1-10 security group IDs
    pub security_group_ids: List<String>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-s3datasourceconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3DataSourceConfiguration {
    /// Length 3-63, pattern `[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9]`
    pub bucket_name: Value<String>,

    /// Up to 100 items
    pub inclusion_prefixes: Option<List<String>>,

    /// Up to 100 glob patterns
    pub inclusion_patterns: Option<List<String>>,

    /// Up to 100 glob patterns, an exclusion wins over an inclusion
    pub exclusion_patterns: Option<List<String>>,

    pub documents_metadata_configuration: Option<Value<DocumentsMetadataConfiguration>>,
    pub access_control_list_configuration: Option<Value<AccessControlListConfiguration>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DocumentsMetadataConfiguration {
    /// Length 1-1024
    pub s3_prefix: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AccessControlListConfiguration {
    /// Path to the access control list file in the bucket. Length 1-1024.
    pub key_path: Option<Value<String>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-sharepointconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SharePointConfiguration {
    /// One of `SHAREPOINT_2013`, `SHAREPOINT_2016`, `SHAREPOINT_ONLINE`
    pub share_point_version: Value<String>,

    /// 1-100 site URLs, pattern `^(https?|ftp|file)://([^\s]*)`
    pub urls: List<String>,

    /// Secrets Manager secret holding the user name and password. Length 1-1284.
    pub secret_arn: Value<String>,

    pub crawl_attachments: Option<Value<bool>>,
    pub use_change_log: Option<Value<bool>>,
    pub inclusion_patterns: Option<List<String>>,
    pub exclusion_patterns: Option<List<String>>,
    pub vpc_configuration: Option<Value<DataSourceVpcConfiguration>>,

    /// Up to 100 mappings
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,

    /// Length 1-100
    pub document_title_field_name: Option<Value<String>>,

    pub disable_local_groups: Option<Value<bool>>,
    pub ssl_certificate_s3_path: Option<Value<S3Path>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-salesforceconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceConfiguration {
    /// Instance URL of the Salesforce site, pattern `^(https?|ftp|file)://([^\s]*)`
    pub server_url: Value<String>,

    /// Secret with `authenticationUrl`, `consumerKey`, `consumerSecret`, `password`,
    /// `securityToken` and `username` keys
    pub secret_arn: Value<String>,

    /// 1-17 standard objects
    pub standard_object_configurations: Option<Value<Vec<SalesforceStandardObjectConfiguration>>>,

    pub knowledge_article_configuration: Option<Value<SalesforceKnowledgeArticleConfiguration>>,
    pub chatter_feed_configuration: Option<Value<SalesforceChatterFeedConfiguration>>,
    pub crawl_attachments: Option<Value<bool>>,
    pub standard_object_attachment_configuration:
        Option<Value<SalesforceStandardObjectAttachmentConfiguration>>,
    pub include_attachment_file_patterns: Option<List<String>>,
    pub exclude_attachment_file_patterns: Option<List<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceStandardObjectConfiguration {
    /// One of `ACCOUNT`, `CAMPAIGN`, `CASE`, `CONTACT`, `CONTRACT`, `DOCUMENT`, `GROUP`,
    /// `IDEA`, `LEAD`, `OPPORTUNITY`, `PARTNER`, `PRICEBOOK`, `PRODUCT`, `PROFILE`,
    /// `SOLUTION`, `TASK`, `USER`
    pub name: Value<String>,

    pub document_data_field_name: Value<String>,
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceKnowledgeArticleConfiguration {
    /// 1-3 of `DRAFT`, `PUBLISHED`, `ARCHIVED`
    pub included_states: List<String>,

    pub standard_knowledge_article_type_configuration:
        Option<Value<SalesforceStandardKnowledgeArticleTypeConfiguration>>,

    /// 1-10 custom article types
    pub custom_knowledge_article_type_configurations:
        Option<Value<Vec<SalesforceCustomKnowledgeArticleTypeConfiguration>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceStandardKnowledgeArticleTypeConfiguration {
    pub document_data_field_name: Value<String>,
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceCustomKnowledgeArticleTypeConfiguration {
    /// Length 1-100, pattern `^[a-zA-Z][a-zA-Z0-9_]*$`
    pub name: Value<String>,

    pub document_data_field_name: Value<String>,
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceChatterFeedConfiguration {
    pub document_data_field_name: Value<String>,
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,

    /// 1-2 of `ACTIVE_USER`, `STANDARD_USER`
    pub include_filter_types: Option<List<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SalesforceStandardObjectAttachmentConfiguration {
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-onedriveconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OneDriveConfiguration {
    /// Length 1-256, pattern `^([a-zA-Z0-9]+(-[a-zA-Z0-9]+)*\.)+[a-z]{2,}$`
    pub tenant_domain: Value<String>,

    pub secret_arn: Value<String>,
    pub one_drive_users: OneDriveUsers,
    pub inclusion_patterns: Option<List<String>>,
    pub exclusion_patterns: Option<List<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
    pub disable_local_groups: Option<Value<bool>>,
}

/// Users whose documents are indexed, as an inline list or a file in S3
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OneDriveUsers {
    /// 1-100 user principal names
    pub one_drive_user_list: Option<List<String>>,

    pub one_drive_user_s3_path: Option<Value<S3Path>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-servicenowconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServiceNowConfiguration {
    /// Host name without the protocol, pattern `^(?!(^(https?|ftp|file):\/\/))[a-z0-9-]+(\.service-now\.com)$`
    pub host_url: Value<String>,

    pub secret_arn: Value<String>,

    /// One of `LONDON`, `OTHERS`
    pub service_now_build_version: Value<String>,

    /// One of `HTTP_BASIC`, `OAUTH2`
    pub authentication_type: Option<Value<String>>,

    pub knowledge_article_configuration: Option<Value<ServiceNowKnowledgeArticleConfiguration>>,
    pub service_catalog_configuration: Option<Value<ServiceNowServiceCatalogConfiguration>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServiceNowKnowledgeArticleConfiguration {
    pub crawl_attachments: Option<Value<bool>>,
    pub include_attachment_file_patterns: Option<List<String>>,
    pub exclude_attachment_file_patterns: Option<List<String>>,
    pub document_data_field_name: Value<String>,
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,

    /// ServiceNow query selecting the articles to index. Length 1-2048.
    pub filter_query: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServiceNowServiceCatalogConfiguration {
    pub crawl_attachments: Option<Value<bool>>,
    pub include_attachment_file_patterns: Option<List<String>>,
    pub exclude_attachment_file_patterns: Option<List<String>>,
    pub document_data_field_name: Value<String>,
    pub document_title_field_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-databaseconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DatabaseConfiguration {
    /// One of `RDS_AURORA_MYSQL`, `RDS_AURORA_POSTGRESQL`, `RDS_MYSQL`, `RDS_POSTGRESQL`
    pub database_engine_type: Value<String>,

    pub connection_configuration: ConnectionConfiguration,
    pub vpc_configuration: Option<Value<DataSourceVpcConfiguration>>,
    pub column_configuration: ColumnConfiguration,
    pub acl_configuration: Option<Value<AclConfiguration>>,
    pub sql_configuration: Option<Value<SqlConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConnectionConfiguration {
    /// Length 1-253
    pub database_host: Value<String>,

    /// 1-65535
    pub database_port: Value<i64>,

    /// Length 1-100, pattern `^[a-zA-Z][a-zA-Z0-9_]*$`
    pub database_name: Value<String>,

    /// Length 1-100, pattern `^[a-zA-Z][a-zA-Z0-9_\.]*$`
    pub table_name: Value<String>,

    pub secret_arn: Value<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ColumnConfiguration {
    pub document_id_column_name: Value<String>,
    pub document_data_column_name: Value<String>,
    pub document_title_column_name: Option<Value<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,

    /// 1-5 columns used to detect changed rows
    pub change_detecting_columns: List<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AclConfiguration {
    /// Column holding the groups allowed to see a document
    pub allowed_groups_column_name: Value<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SqlConfiguration {
    /// One of `DOUBLE_QUOTES`, `NONE`
    pub query_identifiers_enclosing_option: Option<Value<String>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-confluenceconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfluenceConfiguration {
    pub server_url: Value<String>,
    pub secret_arn: Value<String>,

    /// One of `CLOUD`, `SERVER`
    pub version: Value<String>,

    pub space_configuration: Option<Value<ConfluenceSpaceConfiguration>>,
    pub page_configuration: Option<Value<ConfluencePageConfiguration>>,
    pub blog_configuration: Option<Value<ConfluenceBlogConfiguration>>,
    pub attachment_configuration: Option<Value<ConfluenceAttachmentConfiguration>>,
    pub vpc_configuration: Option<Value<DataSourceVpcConfiguration>>,
    pub inclusion_patterns: Option<List<String>>,
    pub exclusion_patterns: Option<List<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfluenceSpaceConfiguration {
    pub crawl_personal_spaces: Option<Value<bool>>,
    pub crawl_archived_spaces: Option<Value<bool>>,
    pub include_spaces: Option<List<String>>,
    pub exclude_spaces: Option<List<String>>,

    /// Up to 4 mappings
    pub space_field_mappings: Option<Value<Vec<ConfluenceFieldToIndexFieldMapping>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfluencePageConfiguration {
    /// Up to 12 mappings
    pub page_field_mappings: Option<Value<Vec<ConfluenceFieldToIndexFieldMapping>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfluenceBlogConfiguration {
    /// Up to 9 mappings
    pub blog_field_mappings: Option<Value<Vec<ConfluenceFieldToIndexFieldMapping>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfluenceAttachmentConfiguration {
    pub crawl_attachments: Option<Value<bool>>,

    /// Up to 11 mappings
    pub attachment_field_mappings: Option<Value<Vec<ConfluenceFieldToIndexFieldMapping>>>,
}

/// Field mapping for Confluence spaces, pages, blogs and attachments
///
/// The allowed `DataSourceFieldName` values depend on where the mapping is used, e.g.
/// `AUTHOR`, `CONTENT_STATUS`, `CREATED_DATE`, `DISPLAY_URL`, `ITEM_TYPE`, `LABELS`,
/// `MODIFIED_DATE`, `PARENT_ID`, `SPACE_KEY`, `SPACE_NAME`, `URL`, `VERSION`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfluenceFieldToIndexFieldMapping {
    pub data_source_field_name: Value<String>,
    pub date_field_format: Option<Value<String>>,
    pub index_field_name: Value<String>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-googledriveconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GoogleDriveConfiguration {
    /// Secret with the service account credentials
    pub secret_arn: Value<String>,

    pub inclusion_patterns: Option<List<String>>,
    pub exclusion_patterns: Option<List<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,

    /// Up to 30 MIME types
    pub exclude_mime_types: Option<List<String>>,

    /// Up to 100 email addresses
    pub exclude_user_accounts: Option<List<String>>,

    /// Up to 100 shared drive IDs
    pub exclude_shared_drives: Option<List<String>>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-webcrawlerconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerConfiguration {
    pub urls: WebCrawlerUrls,

    /// Levels from the seed URL to crawl, 0-10. Defaults to 2.
    pub crawl_depth: Option<Value<i64>>,

    /// 1-1000, defaults to 100
    pub max_links_per_page: Option<Value<i64>>,

    /// 0.000001-50, defaults to 50
    pub max_content_size_per_page_in_mega_bytes: Option<Value<f64>>,

    /// 1-300, defaults to 300
    pub max_urls_per_minute_crawl_rate: Option<Value<i64>>,

    /// Up to 100 regular expressions
    pub url_inclusion_patterns: Option<List<String>>,

    /// Up to 100 regular expressions
    pub url_exclusion_patterns: Option<List<String>>,

    pub proxy_configuration: Option<Value<WebCrawlerProxyConfiguration>>,
    pub authentication_configuration: Option<Value<WebCrawlerAuthenticationConfiguration>>,
}

/// Seed URLs or sitemaps, one of the two is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerUrls {
    pub seed_url_configuration: Option<Value<WebCrawlerSeedUrlConfiguration>>,
    pub site_maps_configuration: Option<Value<WebCrawlerSiteMapsConfiguration>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerSeedUrlConfiguration {
    /// Up to 100 URLs
    pub seed_urls: List<String>,

    /// One of `HOST_ONLY`, `SUBDOMAINS`, `EVERYTHING`
    pub web_crawler_mode: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerSiteMapsConfiguration {
    /// Up to 3 sitemap URLs
    pub site_maps: List<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerProxyConfiguration {
    /// Length 1-253
    pub host: Value<String>,

    /// 1-65535
    pub port: Value<i64>,

    /// Secret with the proxy user name and password
    pub credentials: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerAuthenticationConfiguration {
    /// Up to 10 hosts
    pub basic_authentication: Option<Value<Vec<WebCrawlerBasicAuthentication>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebCrawlerBasicAuthentication {
    pub host: Value<String>,
    pub port: Value<i64>,
    pub credentials: Value<String>,
}

/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-workdocsconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WorkDocsConfiguration {
    /// Directory ID of the WorkDocs site, length 12-12, pattern `d-[0-9a-fA-F]{10}`
    pub organization_id: Value<String>,

    pub crawl_comments: Option<Value<bool>>,
    pub use_change_log: Option<Value<bool>>,
    pub inclusion_patterns: Option<List<String>>,
    pub exclusion_patterns: Option<List<String>>,
    pub field_mappings: Option<Value<Vec<DataSourceToIndexFieldMapping>>>,
}

/// Alters document metadata and content while documents are ingested
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-kendra-datasource-customdocumentenrichmentconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomDocumentEnrichmentConfiguration {
    /// Up to 100 inline rules
    pub inline_configurations: Option<Value<Vec<InlineCustomDocumentEnrichmentConfiguration>>>,

    pub pre_extraction_hook_configuration: Option<Value<HookConfiguration>>,
    pub post_extraction_hook_configuration: Option<Value<HookConfiguration>>,
    pub role_arn: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InlineCustomDocumentEnrichmentConfiguration {
    pub condition: Option<Value<DocumentAttributeCondition>>,
    pub target: Option<Value<DocumentAttributeTarget>>,
    pub document_content_deletion: Option<Value<bool>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DocumentAttributeCondition {
    pub condition_document_attribute_key: Value<String>,

    /// One of `GreaterThan`, `GreaterThanOrEquals`, `LessThan`, `LessThanOrEquals`,
    /// `Equals`, `NotEquals`, `Contains`, `NotContains`, `Exists`, `NotExists`, `BeginsWith`
    pub operator: Value<String>,

    pub condition_on_value: Option<Value<DocumentAttributeValue>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DocumentAttributeTarget {
    pub target_document_attribute_key: Value<String>,
    pub target_document_attribute_value_deletion: Option<Value<bool>>,
    pub target_document_attribute_value: Option<Value<DocumentAttributeValue>>,
}

/// A document attribute value, exactly one member is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DocumentAttributeValue {
    pub string_value: Option<Value<String>>,
    pub string_list_value: Option<List<String>>,
    pub long_value: Option<Value<i64>>,

    /// ISO 8601 date, e.g. `2012-03-25T12:30:10+01:00`
    pub date_value: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HookConfiguration {
    /// Lambda runs only for documents matching this condition
    pub invocation_condition: Option<Value<DocumentAttributeCondition>>,

    pub lambda_arn: Value<String>,

    /// Bucket storing the data processed by the Lambda function
    pub s3_bucket: Value<String>,
}
