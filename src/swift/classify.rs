use super::{Kind, Node};

/// Whether a type node is "simple", i.e. can appear where a primary expression is required without parentheses,
/// like the base of `T?` or `T.Type`.
///
/// Protocol compositions are simple only if they have at most one member.
pub fn is_simple_type(node: &Node) -> bool {
    match node.kind {
        Kind::AssociatedType
        | Kind::AssociatedTypeRef
        | Kind::BoundGenericClass
        | Kind::BoundGenericEnum
        | Kind::BoundGenericFunction
        | Kind::BoundGenericOtherNominalType
        | Kind::BoundGenericProtocol
        | Kind::BoundGenericStructure
        | Kind::BoundGenericTypeAlias
        | Kind::BuiltinTypeName
        | Kind::Class
        | Kind::DependentGenericParamType
        | Kind::DependentGenericType
        | Kind::DependentMemberType
        | Kind::DynamicSelf
        | Kind::Enum
        | Kind::ErrorType
        | Kind::ExistentialMetatype
        | Kind::LabelList
        | Kind::Metatype
        | Kind::MetatypeRepresentation
        | Kind::Module
        | Kind::OtherNominalType
        | Kind::Protocol
        | Kind::ProtocolSymbolicReference
        | Kind::ReturnType
        | Kind::SILBoxType
        | Kind::SILBoxTypeWithLayout
        | Kind::Structure
        | Kind::SugaredArray
        | Kind::SugaredDictionary
        | Kind::SugaredOptional
        | Kind::SugaredParen
        | Kind::Tuple
        | Kind::TupleElementName
        | Kind::Type
        | Kind::TypeAlias
        | Kind::TypeList
        | Kind::TypeSymbolicReference => true,

        Kind::ProtocolList => node.first_child().is_none_or(|type_list| type_list.num_children() <= 1),
        Kind::ProtocolListWithAnyObject => node
            .first_child()
            .and_then(Node::first_child)
            .is_none_or(|type_list| type_list.num_children() == 0),

        Kind::AccessorFunctionReference
        | Kind::Allocator
        | Kind::AnonymousContext
        | Kind::AnonymousDescriptor
        | Kind::AnyProtocolConformanceList
        | Kind::ArgumentTuple
        | Kind::AssocTypePath
        | Kind::AssociatedConformanceDescriptor
        | Kind::AssociatedTypeDescriptor
        | Kind::AssociatedTypeGenericParamRef
        | Kind::AssociatedTypeMetadataAccessor
        | Kind::AssociatedTypeWitnessTableAccessor
        | Kind::AsyncAnnotation
        | Kind::AutoClosureType
        | Kind::BaseConformanceDescriptor
        | Kind::BaseWitnessTableAccessor
        | Kind::CFunctionPointer
        | Kind::CanonicalPrespecializedGenericTypeCachingOnceToken
        | Kind::CanonicalSpecializedGenericMetaclass
        | Kind::CanonicalSpecializedGenericTypeMetadataAccessFunction
        | Kind::ClangType
        | Kind::ClassMetadataBaseOffset
        | Kind::ConcreteProtocolConformance
        | Kind::Constructor
        | Kind::CoroutineContinuationPrototype
        | Kind::CurryThunk
        | Kind::Deallocator
        | Kind::DeclContext
        | Kind::DefaultArgumentInitializer
        | Kind::DefaultAssociatedConformanceAccessor
        | Kind::DefaultAssociatedTypeMetadataAccessor
        | Kind::DependentAssociatedConformance
        | Kind::DependentAssociatedTypeRef
        | Kind::DependentGenericConformanceRequirement
        | Kind::DependentGenericLayoutRequirement
        | Kind::DependentGenericParamCount
        | Kind::DependentGenericSameTypeRequirement
        | Kind::DependentGenericSignature
        | Kind::DependentProtocolConformanceAssociated
        | Kind::DependentProtocolConformanceInherited
        | Kind::DependentProtocolConformanceRoot
        | Kind::DependentPseudogenericSignature
        | Kind::Destructor
        | Kind::DidSet
        | Kind::DifferentiableFunctionType
        | Kind::DirectMethodReferenceAttribute
        | Kind::Directness
        | Kind::DispatchThunk
        | Kind::DynamicAttribute
        | Kind::DynamicallyReplaceableFunctionImpl
        | Kind::DynamicallyReplaceableFunctionKey
        | Kind::DynamicallyReplaceableFunctionVar
        | Kind::EmptyList
        | Kind::EnumCase
        | Kind::EscapingAutoClosureType
        | Kind::EscapingDifferentiableFunctionType
        | Kind::EscapingLinearFunctionType
        | Kind::EscapingObjCBlock
        | Kind::ExplicitClosure
        | Kind::Extension
        | Kind::ExtensionDescriptor
        | Kind::FieldOffset
        | Kind::FirstElementMarker
        | Kind::FullObjCResilientClassStub
        | Kind::FullTypeMetadata
        | Kind::Function
        | Kind::FunctionSignatureSpecialization
        | Kind::FunctionSignatureSpecializationParam
        | Kind::FunctionSignatureSpecializationParamKind
        | Kind::FunctionSignatureSpecializationParamPayload
        | Kind::FunctionSignatureSpecializationReturn
        | Kind::FunctionType
        | Kind::GenericPartialSpecialization
        | Kind::GenericPartialSpecializationNotReAbstracted
        | Kind::GenericProtocolWitnessTable
        | Kind::GenericProtocolWitnessTableInstantiationFunction
        | Kind::GenericSpecialization
        | Kind::GenericSpecializationNotReAbstracted
        | Kind::GenericSpecializationParam
        | Kind::GenericSpecializationPrespecialized
        | Kind::GenericTypeMetadataPattern
        | Kind::GenericTypeParamDecl
        | Kind::Getter
        | Kind::Global
        | Kind::GlobalGetter
        | Kind::GlobalVariableOnceDeclList
        | Kind::GlobalVariableOnceFunction
        | Kind::GlobalVariableOnceToken
        | Kind::IVarDestroyer
        | Kind::IVarInitializer
        | Kind::Identifier
        | Kind::ImplConvention
        | Kind::ImplDifferentiability
        | Kind::ImplDifferentiable
        | Kind::ImplErrorResult
        | Kind::ImplEscaping
        | Kind::ImplFunctionAttribute
        | Kind::ImplFunctionConvention
        | Kind::ImplFunctionConventionName
        | Kind::ImplFunctionType
        | Kind::ImplInvocationSubstitutions
        | Kind::ImplLinear
        | Kind::ImplParameter
        | Kind::ImplPatternSubstitutions
        | Kind::ImplResult
        | Kind::ImplYield
        | Kind::ImplicitClosure
        | Kind::InOut
        | Kind::Index
        | Kind::InfixOperator
        | Kind::Initializer
        | Kind::InlinedGenericFunction
        | Kind::IsSerialized
        | Kind::KeyPathEqualsThunkHelper
        | Kind::KeyPathGetterThunkHelper
        | Kind::KeyPathHashThunkHelper
        | Kind::KeyPathSetterThunkHelper
        | Kind::LazyProtocolWitnessTableAccessor
        | Kind::LazyProtocolWitnessTableCacheVariable
        | Kind::LinearFunctionType
        | Kind::LocalDeclName
        | Kind::MaterializeForSet
        | Kind::MergedFunction
        | Kind::Metaclass
        | Kind::MetadataInstantiationCache
        | Kind::MethodDescriptor
        | Kind::MethodLookupFunction
        | Kind::ModifyAccessor
        | Kind::ModuleDescriptor
        | Kind::NativeOwningAddressor
        | Kind::NativeOwningMutableAddressor
        | Kind::NativePinningAddressor
        | Kind::NativePinningMutableAddressor
        | Kind::NoEscapeFunctionType
        | Kind::NominalTypeDescriptor
        | Kind::NonObjCAttribute
        | Kind::NoncanonicalSpecializedGenericTypeMetadata
        | Kind::NoncanonicalSpecializedGenericTypeMetadataCache
        | Kind::Number
        | Kind::ObjCAsyncCompletionHandlerImpl
        | Kind::ObjCAttribute
        | Kind::ObjCBlock
        | Kind::ObjCMetadataUpdateFunction
        | Kind::ObjCResilientClassStub
        | Kind::OpaqueReturnType
        | Kind::OpaqueReturnTypeOf
        | Kind::OpaqueType
        | Kind::OpaqueTypeDescriptor
        | Kind::OpaqueTypeDescriptorAccessor
        | Kind::OpaqueTypeDescriptorAccessorImpl
        | Kind::OpaqueTypeDescriptorAccessorKey
        | Kind::OpaqueTypeDescriptorAccessorVar
        | Kind::OpaqueTypeDescriptorSymbolicReference
        | Kind::OutlinedAssignWithCopy
        | Kind::OutlinedAssignWithTake
        | Kind::OutlinedBridgedMethod
        | Kind::OutlinedConsume
        | Kind::OutlinedCopy
        | Kind::OutlinedDestroy
        | Kind::OutlinedInitializeWithCopy
        | Kind::OutlinedInitializeWithTake
        | Kind::OutlinedRelease
        | Kind::OutlinedRetain
        | Kind::OutlinedVariable
        | Kind::Owned
        | Kind::OwningAddressor
        | Kind::OwningMutableAddressor
        | Kind::PartialApplyForwarder
        | Kind::PartialApplyObjCForwarder
        | Kind::PostfixOperator
        | Kind::PrefixOperator
        | Kind::PrivateDeclName
        | Kind::PropertyDescriptor
        | Kind::PropertyWrapperBackingInitializer
        | Kind::ProtocolConformance
        | Kind::ProtocolConformanceDescriptor
        | Kind::ProtocolConformanceRefInOtherModule
        | Kind::ProtocolConformanceRefInProtocolModule
        | Kind::ProtocolConformanceRefInTypeModule
        | Kind::ProtocolDescriptor
        | Kind::ProtocolListWithClass
        | Kind::ProtocolRequirementsBaseDescriptor
        | Kind::ProtocolSelfConformanceDescriptor
        | Kind::ProtocolSelfConformanceWitness
        | Kind::ProtocolSelfConformanceWitnessTable
        | Kind::ProtocolWitness
        | Kind::ProtocolWitnessTable
        | Kind::ProtocolWitnessTableAccessor
        | Kind::ProtocolWitnessTablePattern
        | Kind::ReabstractionThunk
        | Kind::ReabstractionThunkHelper
        | Kind::ReabstractionThunkHelperWithSelf
        | Kind::ReadAccessor
        | Kind::ReflectionMetadataAssocTypeDescriptor
        | Kind::ReflectionMetadataBuiltinDescriptor
        | Kind::ReflectionMetadataFieldDescriptor
        | Kind::ReflectionMetadataSuperclassDescriptor
        | Kind::RelatedEntityDeclName
        | Kind::ResilientProtocolWitnessTable
        | Kind::RetroactiveConformance
        | Kind::SILBoxImmutableField
        | Kind::SILBoxLayout
        | Kind::SILBoxMutableField
        | Kind::Setter
        | Kind::Shared
        | Kind::SpecializationPassID
        | Kind::Static
        | Kind::Subscript
        | Kind::Suffix
        | Kind::ThinFunctionType
        | Kind::ThrowsAnnotation
        | Kind::TupleElement
        | Kind::TypeMangling
        | Kind::TypeMetadata
        | Kind::TypeMetadataAccessFunction
        | Kind::TypeMetadataCompletionFunction
        | Kind::TypeMetadataDemanglingCache
        | Kind::TypeMetadataInstantiationCache
        | Kind::TypeMetadataInstantiationFunction
        | Kind::TypeMetadataLazyCache
        | Kind::TypeMetadataSingletonInitializationCache
        | Kind::UncurriedFunctionType
        | Kind::UnknownIndex
        | Kind::Unmanaged
        | Kind::Unowned
        | Kind::UnsafeAddressor
        | Kind::UnsafeMutableAddressor
        | Kind::VTableAttribute
        | Kind::VTableThunk
        | Kind::ValueWitness
        | Kind::ValueWitnessTable
        | Kind::Variable
        | Kind::VariadicMarker
        | Kind::Weak
        | Kind::WillSet => false,
    }
}

/// Existential types get `.Protocol` rather than `.Type` as metatype suffix.
pub fn is_existential_type(node: &Node) -> bool {
    matches!(
        node.kind,
        Kind::ExistentialMetatype | Kind::ProtocolList | Kind::ProtocolListWithClass | Kind::ProtocolListWithAnyObject
    )
}

/// Function types are printed directly after a name or a generic signature, everything else gets a space.
pub fn needs_space_before_type(node: &Node) -> bool {
    match node.kind {
        Kind::Type => node.first_child().is_none_or(needs_space_before_type),
        Kind::FunctionType | Kind::NoEscapeFunctionType | Kind::UncurriedFunctionType | Kind::DependentGenericType => {
            false
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use crate::swift::{Kind, Node};
    use strum::IntoEnumIterator;

    fn protocol_list(kind: Kind, members: usize) -> Node<'static> {
        let type_list = Node::with_children(Kind::TypeList, (0..members).map(|_| Node::new(Kind::Protocol)));
        let protocols = Node::with_children(Kind::ProtocolList, [type_list]);

        if kind == Kind::ProtocolList {
            protocols
        } else {
            Node::with_children(kind, [protocols])
        }
    }

    #[test]
    fn test_every_kind_is_classified() {
        let simple = Kind::iter().filter(|&kind| super::is_simple_type(&Node::new(kind))).count();

        // Protocol compositions without children count as simple.
        assert_eq!(simple, 41);
    }

    #[test]
    fn test_is_simple_type() {
        #[track_caller]
        fn check(node: &Node, expected: bool) {
            assert_eq!(super::is_simple_type(node), expected);
        }

        check(&Node::new(Kind::Structure), true);
        check(&Node::new(Kind::Tuple), true);
        check(&Node::new(Kind::SugaredOptional), true);
        check(&Node::new(Kind::FunctionType), false);
        check(&Node::new(Kind::ProtocolListWithClass), false);
        check(&Node::new(Kind::Weak), false);

        check(&protocol_list(Kind::ProtocolList, 0), true);
        check(&protocol_list(Kind::ProtocolList, 1), true);
        check(&protocol_list(Kind::ProtocolList, 2), false);
        check(&protocol_list(Kind::ProtocolListWithAnyObject, 0), true);
        check(&protocol_list(Kind::ProtocolListWithAnyObject, 1), false);
    }

    #[test]
    fn test_needs_space_before_type() {
        let function = Node::with_children(Kind::Type, [Node::new(Kind::FunctionType)]);
        let structure = Node::with_children(Kind::Type, [Node::new(Kind::Structure)]);

        assert!(!super::needs_space_before_type(&function));
        assert!(!super::needs_space_before_type(&Node::new(Kind::DependentGenericType)));
        assert!(super::needs_space_before_type(&structure));
    }
}
