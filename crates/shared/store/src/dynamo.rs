//! DynamoDB record store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use tracing::{debug, info};

use crate::{with_key, Item, RecordKey, RecordStore, ScanFilter, StoreError, StoreResult};

type Attributes = HashMap<String, AttributeValue>;

/// Record store backed by AWS DynamoDB.
///
/// Tables use a string partition key `PK` and sort key `SK`.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    /// Build a store from the default AWS credential chain.
    ///
    /// `endpoint_url` points the client at a local DynamoDB when set.
    pub async fn connect(endpoint_url: Option<&str>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let client = match endpoint_url {
            Some(endpoint) => {
                let dynamo_config = aws_sdk_dynamodb::config::Builder::from(&config)
                    .endpoint_url(endpoint)
                    .build();
                Client::from_conf(dynamo_config)
            }
            None => Client::new(&config),
        };

        info!(endpoint = endpoint_url.unwrap_or("default"), "Connected to DynamoDB");
        Self { client }
    }

    fn key_attributes(key: &RecordKey) -> Attributes {
        HashMap::from([
            (domain::PARTITION_KEY_ATTR.to_string(), AttributeValue::S(key.pk.clone())),
            (domain::SORT_KEY_ATTR.to_string(), AttributeValue::S(key.sk.clone())),
        ])
    }
}

fn to_attributes(item: Item) -> StoreResult<Attributes> {
    Ok(serde_dynamo::to_item(item)?)
}

fn from_attributes(attributes: Attributes) -> StoreResult<Item> {
    Ok(serde_dynamo::from_item(attributes)?)
}

/// Build `SET #a0 = :a0, #a1 = :a1, ...` with its name and value maps.
fn set_expression(changes: Item) -> StoreResult<(String, HashMap<String, String>, Attributes)> {
    let mut clauses = Vec::with_capacity(changes.len());
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    for (i, (attr, value)) in changes.into_iter().enumerate() {
        clauses.push(format!("#a{i} = :a{i}"));
        names.insert(format!("#a{i}"), attr);
        values.insert(format!(":a{i}"), serde_dynamo::to_attribute_value(value)?);
    }

    Ok((format!("SET {}", clauses.join(", ")), names, values))
}

/// Build `#f0 = :f0 AND #f1 = :f1 ...` for a scan filter.
fn filter_expression(
    filter: &ScanFilter,
) -> StoreResult<(String, HashMap<String, String>, Attributes)> {
    let mut clauses = Vec::with_capacity(filter.conditions().len());
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    for (i, (attr, value)) in filter.conditions().iter().enumerate() {
        clauses.push(format!("#f{i} = :f{i}"));
        names.insert(format!("#f{i}"), attr.clone());
        values.insert(format!(":f{i}"), serde_dynamo::to_attribute_value(value)?);
    }

    Ok((clauses.join(" AND "), names, values))
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn get_item(&self, table: &str, key: &RecordKey) -> StoreResult<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(Self::key_attributes(key)))
            .send()
            .await
            .map_err(|e| StoreError::backend(table, "get_item", DisplayErrorContext(&e)))?;

        output.item.map(from_attributes).transpose()
    }

    async fn put_item(&self, table: &str, key: &RecordKey, item: Item) -> StoreResult<()> {
        let attributes = to_attributes(with_key(item, key))?;

        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| StoreError::backend(table, "put_item", DisplayErrorContext(&e)))?;

        debug!(table = %table, key = %key, "Stored record in DynamoDB");
        Ok(())
    }

    async fn update_item(
        &self,
        table: &str,
        key: &RecordKey,
        changes: Item,
    ) -> StoreResult<Option<Item>> {
        if changes.is_empty() {
            return self.get_item(table, key).await;
        }

        let (expression, names, values) = set_expression(changes)?;

        let result = self
            .client
            .update_item()
            .table_name(table)
            .set_key(Some(Self::key_attributes(key)))
            .update_expression(expression)
            .condition_expression("attribute_exists(PK)")
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => output.attributes.map(from_attributes).transpose(),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_conditional_check_failed_exception() {
                    debug!(table = %table, key = %key, "Update skipped, record does not exist");
                    Ok(None)
                } else {
                    Err(StoreError::backend(table, "update_item", DisplayErrorContext(&err)))
                }
            }
        }
    }

    async fn scan(&self, table: &str, filter: &ScanFilter) -> StoreResult<Vec<Item>> {
        let mut request = self.client.scan().table_name(table);

        if !filter.is_empty() {
            let (expression, names, values) = filter_expression(filter)?;
            request = request
                .filter_expression(expression)
                .set_expression_attribute_names(Some(names))
                .set_expression_attribute_values(Some(values));
        }

        let mut pages = request.into_paginator().items().send();
        let mut items = Vec::new();

        while let Some(page) = pages.next().await {
            let attributes =
                page.map_err(|e| StoreError::backend(table, "scan", DisplayErrorContext(&e)))?;
            items.push(from_attributes(attributes)?);
        }

        debug!(table = %table, count = items.len(), "Scanned table");
        Ok(items)
    }
}
