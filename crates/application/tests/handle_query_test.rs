mod helpers;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use dnsresolver_application::ports::{CacheStore, ResolutionSource};
use dnsresolver_application::use_cases::HandleDnsQueryUseCase;
use dnsresolver_domain::{CacheEntry, DnsQuery, DomainError, ExpiryPolicy, RecordType, ResourceRecord};
use helpers::{MockCacheStore, MockDnsResolver, MockRecordStore};
use std::sync::Arc;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

fn example_a() -> ResourceRecord {
    ResourceRecord::new("example.com.", RecordType::A, "93.184.216.34", 3600)
}

fn seeded_cache() -> Arc<MockCacheStore> {
    Arc::new(MockCacheStore::with_entries(vec![CacheEntry::insert_new(
        example_a(),
        t0(),
    )]))
}

fn use_case(
    records: MockRecordStore,
    cache: Arc<MockCacheStore>,
    resolver: Arc<MockDnsResolver>,
    policy: ExpiryPolicy,
) -> HandleDnsQueryUseCase {
    HandleDnsQueryUseCase::new(Arc::new(records), cache, resolver, policy)
}

fn query() -> DnsQuery {
    DnsQuery::new("example.com.", RecordType::A)
}

// ============================================================================
// Cache expiry scenario
// ============================================================================

#[tokio::test]
async fn test_live_cache_entry_is_a_hit() {
    let cache = seeded_cache();
    let resolver = Arc::new(MockDnsResolver::failing());
    let uc = use_case(MockRecordStore::new(), cache, resolver.clone(), ExpiryPolicy::Retain);

    let result = uc
        .execute_at(&query(), t0() + TimeDelta::seconds(1000))
        .await
        .unwrap();

    assert_eq!(result.source, ResolutionSource::Cache);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].value, "93.184.216.34");
    assert_eq!(result.records[0].ttl, 2600);
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_expired_entry_is_a_miss_but_stays_stored() {
    let cache = seeded_cache();
    let resolver = Arc::new(MockDnsResolver::answering(vec![example_a()]));
    let uc = use_case(
        MockRecordStore::new(),
        cache.clone(),
        resolver.clone(),
        ExpiryPolicy::Retain,
    );

    let result = uc
        .execute_at(&query(), t0() + TimeDelta::seconds(3700))
        .await
        .unwrap();

    assert!(matches!(result.source, ResolutionSource::Upstream(_)));
    assert_eq!(resolver.calls(), 1);
    assert_eq!(cache.len(), 1, "lazy expiry must not remove the entry");
    assert_eq!(cache.prune_calls(), 0);
}

#[tokio::test]
async fn test_evict_policy_prunes_expired_entries() {
    let cache = seeded_cache();
    let resolver = Arc::new(MockDnsResolver::answering(vec![example_a()]));
    let uc = use_case(
        MockRecordStore::new(),
        cache.clone(),
        resolver.clone(),
        ExpiryPolicy::Evict,
    );

    uc.execute_at(&query(), t0() + TimeDelta::seconds(3700))
        .await
        .unwrap();

    assert_eq!(cache.prune_calls(), 1);
    assert_eq!(cache.len(), 0);
}

// ============================================================================
// Lookup order
// ============================================================================

#[tokio::test]
async fn test_static_records_win_over_cache() {
    let static_record = ResourceRecord::new("example.com.", RecordType::A, "10.0.0.7", 300);
    let cache = seeded_cache();
    let resolver = Arc::new(MockDnsResolver::failing());
    let uc = use_case(
        MockRecordStore::with_records(vec![static_record]),
        cache,
        resolver.clone(),
        ExpiryPolicy::Retain,
    );

    let result = uc.execute_at(&query(), t0()).await.unwrap();

    assert_eq!(result.source, ResolutionSource::Local);
    assert!(result.authoritative);
    assert_eq!(result.records[0].value, "10.0.0.7");
    assert_eq!(resolver.calls(), 0);
}

#[tokio::test]
async fn test_other_types_do_not_hit_the_a_entry() {
    let cache = seeded_cache();
    let resolver = Arc::new(MockDnsResolver::answering(vec![]));
    let uc = use_case(MockRecordStore::new(), cache, resolver.clone(), ExpiryPolicy::Retain);

    let aaaa = DnsQuery::new("example.com.", RecordType::AAAA);
    uc.execute_at(&aaaa, t0()).await.unwrap();

    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn test_resolver_failure_is_returned_to_caller() {
    let resolver = Arc::new(MockDnsResolver::failing());
    let uc = use_case(
        MockRecordStore::new(),
        Arc::new(MockCacheStore::new()),
        resolver,
        ExpiryPolicy::Retain,
    );

    let result = uc.execute_at(&query(), t0()).await;

    assert!(matches!(result, Err(DomainError::FallbackExhausted { .. })));
}
