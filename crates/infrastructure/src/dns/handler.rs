//! hickory-server request handler bridging wire queries to the resolution
//! use case and rendering its outcomes as DNS replies.

use hickory_proto::op::{Header, OpCode, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use httprecord_application::{Resolution, ResolveQueryUseCase};
use httprecord_domain::{DomainError, FailureCode, RecordData, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct DnsServerHandler {
    resolver: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    async fn reply<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: &mut R,
        answers: Vec<Record>,
    ) -> ResponseInfo {
        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_recursion_available(true);

        let response = builder.build(header, answers.iter(), &[], &[], &[]);
        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "failed to send response");
                serve_failed()
            }
        }
    }

    async fn reply_error<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: &mut R,
        code: ResponseCode,
    ) -> ResponseInfo {
        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.error_msg(request.header(), code);
        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "failed to send error response");
                serve_failed()
            }
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        if request.op_code() != OpCode::Query {
            return self
                .reply_error(request, &mut response_handle, ResponseCode::NotImp)
                .await;
        }

        let info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                warn!(error = %e, "malformed request");
                return self
                    .reply_error(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let qname = info.query.name().to_string();
        let qtype = supported_type(info.query.query_type());

        debug!(name = %qname, rtype = ?info.query.query_type(), "lookup");

        match self.resolver.execute(&qname, qtype).await {
            Ok(Resolution::Answer(records)) => match to_proto_records(&records) {
                Ok(answers) => self.reply(request, &mut response_handle, answers).await,
                Err(e) => {
                    error!(name = %qname, error = %e, "unable to encode answer");
                    self.reply_error(request, &mut response_handle, ResponseCode::ServFail)
                        .await
                }
            },
            Ok(Resolution::NoData) => self.reply(request, &mut response_handle, vec![]).await,
            Ok(Resolution::Fallthrough) => {
                // End of the chain in this binary; an embedding host would
                // hand the query to its next handler here.
                debug!(name = %qname, "fallthrough with no next handler");
                self.reply_error(request, &mut response_handle, ResponseCode::Refused)
                    .await
            }
            Err(e) => {
                warn!(name = %qname, error = %e, "resolution failed");
                self.reply_error(request, &mut response_handle, error_rcode(&e))
                    .await
            }
        }
    }
}

/// Wire type → supported record type; `None` means this server can never
/// answer the query.
fn supported_type(qtype: hickory_proto::rr::RecordType) -> Option<RecordType> {
    match qtype {
        hickory_proto::rr::RecordType::TXT => Some(RecordType::Txt),
        hickory_proto::rr::RecordType::A => Some(RecordType::A),
        hickory_proto::rr::RecordType::AAAA => Some(RecordType::Aaaa),
        _ => None,
    }
}

fn error_rcode(error: &DomainError) -> ResponseCode {
    match error.failure_code() {
        FailureCode::NameError => ResponseCode::NXDomain,
        FailureCode::ServerFailure => ResponseCode::ServFail,
    }
}

fn to_proto_records(records: &[ResourceRecord]) -> Result<Vec<Record>, DomainError> {
    records.iter().map(to_proto_record).collect()
}

fn to_proto_record(record: &ResourceRecord) -> Result<Record, DomainError> {
    let name =
        Name::from_utf8(&record.name).map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;
    let rdata = match &record.data {
        RecordData::Txt(text) => RData::TXT(TXT::new(vec![text.clone()])),
        RecordData::A(addr) => RData::A((*addr).into()),
        RecordData::Aaaa(addr) => RData::AAAA((*addr).into()),
    };
    Ok(Record::from_rdata(name, record.ttl, rdata))
}

fn serve_failed() -> ResponseInfo {
    let mut header = Header::new();
    header.set_response_code(ResponseCode::ServFail);
    header.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_type_mapping() {
        assert_eq!(
            supported_type(hickory_proto::rr::RecordType::TXT),
            Some(RecordType::Txt)
        );
        assert_eq!(
            supported_type(hickory_proto::rr::RecordType::AAAA),
            Some(RecordType::Aaaa)
        );
        assert_eq!(supported_type(hickory_proto::rr::RecordType::MX), None);
        assert_eq!(supported_type(hickory_proto::rr::RecordType::SOA), None);
    }

    #[test]
    fn test_error_rcode_mapping() {
        let not_found = DomainError::BackendIndicated {
            http_status: 404,
            failure: FailureCode::NameError,
        };
        assert_eq!(error_rcode(&not_found), ResponseCode::NXDomain);

        let upstream_broken = DomainError::BackendIndicated {
            http_status: 503,
            failure: FailureCode::ServerFailure,
        };
        assert_eq!(error_rcode(&upstream_broken), ResponseCode::ServFail);

        assert_eq!(
            error_rcode(&DomainError::BodyTooLong(4096)),
            ResponseCode::ServFail
        );
    }

    #[test]
    fn test_decoded_records_convert_to_wire_records() {
        let records = vec![
            ResourceRecord::new("example.com.", 300, RecordData::Txt("Hello".into())),
            ResourceRecord::new("example.com.", 60, RecordData::A("1.2.3.4".parse().unwrap())),
        ];
        let proto = to_proto_records(&records).unwrap();
        assert_eq!(proto.len(), 2);
        assert_eq!(proto[0].ttl(), 300);
        assert_eq!(proto[1].record_type(), hickory_proto::rr::RecordType::A);
    }
}
